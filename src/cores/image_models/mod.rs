pub mod background_remover;
pub mod flux_kontext;
pub mod image_controller;
pub mod replicate_client;
