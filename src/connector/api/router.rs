use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ServeController, VerifyController};

pub struct Router<'a> {
    serve_controller: ServeController<'a>,
    verify_controller: VerifyController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            serve_controller: ServeController::new(container),
            verify_controller: VerifyController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Serve { host, port } => self.serve_controller.serve(host, port).await,
            Commands::Verify {
                text,
                file,
                server,
                format,
            } => {
                self.verify_controller
                    .verify(text, file, server, format)
                    .await
            }
        }
    }
}
