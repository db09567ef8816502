// src/services/mod.rs
pub mod chatbot;
pub mod openai;
pub mod profile;
pub mod provider;
pub mod resolver;
pub mod validator;
