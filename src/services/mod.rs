pub mod classifier;
pub mod dispatcher;
pub mod github;
pub mod openai;
