pub mod field;
pub mod form;
pub mod job_record;
pub mod row;
pub mod session;
