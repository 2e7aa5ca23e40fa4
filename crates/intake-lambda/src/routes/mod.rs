pub mod health;
pub mod pathways;
pub mod submissions;
