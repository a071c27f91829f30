pub mod reader;
pub mod secret_probe;
pub mod seeder;
