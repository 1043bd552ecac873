pub mod archiver;
pub mod grades;
pub mod journal;
pub mod mover;
pub mod naming;
pub mod scan;
