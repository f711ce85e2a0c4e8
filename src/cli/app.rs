//! Command registry and dispatcher

use crate::cli::settings::{FieldKind, FieldSpec, SettingsModel};
use crate::commands::{self, CommandContext, CommandHandler};
use crate::config::{load_config, AppConfig, ConfigOverrides};
use crate::error::{BindingError, BindingResult, ConfigError, ConfigResult, Result};
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Immutable registration record for one command
pub struct CommandDescriptor {
    /// Command name, unique within the registry
    pub name: &'static str,
    /// Human description shown in usage help
    pub description: &'static str,
    /// Usage examples shown in usage help
    pub examples: Vec<String>,
    /// Option metadata used for binding
    pub fields: Vec<FieldSpec>,
    /// The behavior bound to this command
    pub handler: Box<dyn CommandHandler>,
}

/// The command registry and dispatcher
pub struct App {
    commands: Vec<CommandDescriptor>,
    default_command: Option<String>,
    context: CommandContext,
}

impl App {
    /// Create an empty registry over the given execution context
    pub fn new(context: CommandContext) -> Self {
        App {
            commands: Vec::new(),
            default_command: None,
            context,
        }
    }

    /// Create a registry with the standard commands registered and
    /// `hello` designated as the default
    pub fn with_default_commands(config: AppConfig) -> Result<Self> {
        let mut app = App::new(CommandContext::new(config));

        app.register(commands::hello::descriptor())?;
        app.register(commands::ip::descriptor())?;
        app.register(commands::yo::descriptor())?;
        app.set_default_command("hello")?;

        Ok(app)
    }

    /// Register a command; names must be unique
    pub fn register(&mut self, descriptor: CommandDescriptor) -> ConfigResult<()> {
        if self.find(descriptor.name).is_some() {
            return Err(ConfigError::DuplicateCommand(descriptor.name.to_string()));
        }
        self.commands.push(descriptor);
        Ok(())
    }

    /// Designate the command invoked when no command name is given
    pub fn set_default_command(&mut self, name: &str) -> ConfigResult<()> {
        if self.find(name).is_none() {
            return Err(ConfigError::UnknownDefaultCommand(name.to_string()));
        }
        self.default_command = Some(name.to_string());
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|d| d.name == name)
    }

    /// Resolve a command from the argument vector, bind its settings,
    /// invoke it, and return the process exit code.
    pub async fn dispatch(&self, argv: &[String]) -> Result<i32> {
        let (name, rest): (String, &[String]) = match argv.first() {
            Some(token) if !token.starts_with('-') => {
                if self.find(token).is_some() {
                    (token.clone(), &argv[1..])
                } else {
                    let mut stderr = io::stderr();
                    writeln!(stderr, "Unknown command '{}'", token)?;
                    writeln!(stderr)?;
                    self.print_usage(&mut stderr)?;
                    return Ok(2);
                }
            }
            // A flag-like or absent first token falls back to the default command.
            _ => {
                let default = self
                    .default_command
                    .clone()
                    .ok_or(ConfigError::NoDefaultCommand)?;
                (default, argv)
            }
        };

        let Some(descriptor) = self.find(&name) else {
            return Err(ConfigError::UnknownDefaultCommand(name).into());
        };

        let mut clap_argv = vec![name.clone()];
        clap_argv.extend(rest.iter().cloned());

        match build_clap_command(descriptor).try_get_matches_from(clap_argv) {
            Ok(matches) => {
                let settings = bind_settings(descriptor, &matches)?;
                let code = descriptor.handler.execute(&settings, &self.context).await?;
                Ok(code)
            }
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    err.print()?;
                    Ok(0)
                }
                _ => {
                    let binding = BindingError::Parse(err.to_string());
                    debug!(command = %name, error = %binding, "argument binding failed");
                    err.print()?;
                    Ok(2)
                }
            },
        }
    }

    /// Print the command listing with descriptions and examples
    pub fn print_usage<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "Usage: nox [command] [options]")?;
        writeln!(w)?;
        writeln!(w, "Commands:")?;
        for descriptor in &self.commands {
            writeln!(w, "  {:<8} {}", descriptor.name, descriptor.description)?;
        }
        writeln!(w)?;
        writeln!(w, "Examples:")?;
        for descriptor in &self.commands {
            for example in &descriptor.examples {
                writeln!(w, "  nox {}", example)?;
            }
        }
        Ok(())
    }
}

/// Build a clap command from a descriptor's field metadata
fn build_clap_command(descriptor: &CommandDescriptor) -> Command {
    let mut cmd = Command::new(descriptor.name.to_string())
        .about(descriptor.description.to_string())
        .version(crate::VERSION);

    for field in &descriptor.fields {
        let mut arg = Arg::new(field.name.clone())
            .long(field.name.clone())
            .help(field.help.clone());

        if let Some(short) = field.short {
            arg = arg.short(short);
        }

        match field.kind {
            FieldKind::Flag => {
                arg = arg.action(ArgAction::SetTrue);
            }
            FieldKind::Text => {
                arg = arg.value_name(field.name.to_uppercase());

                if let Some(default) = &field.default {
                    arg = arg.default_value(default.clone());
                }

                if field.required {
                    arg = arg.required(true);
                }
            }
        }

        cmd = cmd.arg(arg);
    }

    cmd
}

/// Extract bound values from clap matches into a fresh settings model.
/// After binding, every field is explicit, defaulted, or legitimately
/// unset (optional text field with no default).
fn bind_settings(
    descriptor: &CommandDescriptor,
    matches: &ArgMatches,
) -> BindingResult<SettingsModel> {
    let mut settings = SettingsModel::new();

    for field in &descriptor.fields {
        match field.kind {
            FieldKind::Flag => {
                settings.set_flag(&field.name, matches.get_flag(&field.name));
            }
            FieldKind::Text => {
                if let Some(value) = matches.get_one::<String>(&field.name) {
                    settings.set_text(&field.name, value.clone());
                } else if let Some(default) = &field.default {
                    settings.set_text(&field.name, default.clone());
                } else if field.required {
                    return Err(BindingError::MissingRequired {
                        command: descriptor.name.to_string(),
                        field: field.name.clone(),
                    });
                }
            }
        }
    }

    Ok(settings)
}

/// Bind raw tokens against a descriptor without dispatching
pub fn bind_tokens(descriptor: &CommandDescriptor, tokens: &[String]) -> BindingResult<SettingsModel> {
    let mut argv = vec![descriptor.name.to_string()];
    argv.extend(tokens.iter().cloned());

    let matches = build_clap_command(descriptor)
        .try_get_matches_from(argv)
        .map_err(|e| BindingError::Parse(e.to_string()))?;

    bind_settings(descriptor, &matches)
}

/// Run the CLI application with the process arguments
pub async fn run() -> Result<i32> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let overrides = ConfigOverrides {
        database: extract_database_arg(&mut args),
    };
    let config = load_config(&overrides)?;

    let app = App::with_default_commands(config)?;
    app.dispatch(&args).await
}

/// Remove a global `--database <PATH>` override before command binding
fn extract_database_arg(args: &mut Vec<String>) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--database" && i + 1 < args.len() {
            let value = args.remove(i + 1);
            args.remove(i);
            return Some(PathBuf::from(value));
        }
    }
    None
}
