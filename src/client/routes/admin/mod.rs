pub mod dashboard;
pub mod job_post;

pub use dashboard::AdminDashboard;
pub use job_post::JobPost;
