pub mod interaction_service;
