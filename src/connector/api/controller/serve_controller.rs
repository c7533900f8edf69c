use anyhow::Result;
use tracing::info;

use crate::connector::http;

use super::super::Container;

pub struct ServeController<'a> {
    container: &'a Container,
}

impl<'a> ServeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn serve(&self, host: String, port: u16) -> Result<String> {
        info!(
            "Forwarding articles to {} ({})",
            self.container.config().provider,
            self.container.model_name()
        );
        http::serve(self.container.app_state(), &host, port).await?;
        Ok("Server stopped.".to_string())
    }
}
