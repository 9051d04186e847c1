pub mod ollama_api_agent;
pub mod persona_agent;
pub mod web_search;

pub use ollama_api_agent::OllamaApiAgent;
pub use persona_agent::PersonaAgent;
pub use web_search::DuckDuckGoSearch;
