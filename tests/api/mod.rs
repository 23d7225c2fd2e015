mod auth;
mod job;
