pub mod admin;
pub mod applicant;
pub mod home;
pub mod jobs;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;

pub use home::Home;
pub use jobs::{JobDetail, JobList};
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use register::Register;
