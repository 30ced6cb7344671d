// Candidate–job matching: pure scoring, parallel ranking, and the two lookup
// contexts (job → candidates, candidate → jobs) built on the talent repository.

pub mod handlers;
pub mod ranking;
pub mod scorer;
pub mod service;
