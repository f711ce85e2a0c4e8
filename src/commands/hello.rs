//! The `hello` greeting command

use crate::cli::{CommandDescriptor, FieldSpec, SettingsModel};
use crate::commands::{CommandContext, CommandHandler};
use crate::error::Result;
use async_trait::async_trait;
use std::io;
use tracing::debug;

/// Emits a static greeting; has no failure path.
pub struct HelloCommand;

/// Registration record for `hello`
pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "hello",
        description: "Say hello to anyone.",
        examples: vec!["hello --name Anakin".to_string()],
        fields: vec![FieldSpec::text("name")
            .short('n')
            .default_value("World")
            .help("The person or thing to greet.")],
        handler: Box::new(HelloCommand),
    }
}

#[async_trait]
impl CommandHandler for HelloCommand {
    async fn execute(&self, settings: &SettingsModel, ctx: &CommandContext) -> Result<i32> {
        let name = settings.get_text("name").unwrap_or("World");

        let mut stdout = io::stdout();
        let formatter = ctx.formatter();
        formatter.render_raw(&mut stdout, &format!("Hello {}!", formatter.accent(name)))?;

        debug!(name, "greeting emitted");
        Ok(0)
    }
}
