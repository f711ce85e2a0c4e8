//! The `ip` remote geolocation lookup command

use crate::cli::{CommandDescriptor, FieldSpec, SettingsModel};
use crate::commands::{CommandContext, CommandHandler};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io;
use tracing::{error, info};

/// Queries a geolocation endpoint for the caller's address or a specific
/// one, rendering the response as a table or as raw JSON.
pub struct IpCommand;

/// Registration record for `ip`
pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "ip",
        description: "Display information about an IP address.",
        examples: vec![
            "ip".to_string(),
            "ip --address 8.8.8.8".to_string(),
            "ip --json".to_string(),
        ],
        fields: vec![
            FieldSpec::text("address")
                .short('a')
                .help("The public IP address to show information about."),
            FieldSpec::flag("json")
                .short('j')
                .help("Output the result in json."),
        ],
        handler: Box::new(IpCommand),
    }
}

/// Request URL for the configured endpoint: the caller's own address when
/// none is given, otherwise the address as a path segment.
fn build_url(endpoint: &str, address: Option<&str>) -> String {
    match address {
        None => format!("{}/geo", endpoint),
        Some(address) => format!("{}/{}/geo", endpoint, address),
    }
}

#[async_trait]
impl CommandHandler for IpCommand {
    async fn execute(&self, settings: &SettingsModel, ctx: &CommandContext) -> Result<i32> {
        let url = build_url(ctx.geo_endpoint(), settings.get_text("address"));

        info!(%url, "querying geolocation endpoint");

        // Transport failures propagate; only a non-success status is
        // handled here. No retries.
        let response = ctx.http.get(url.as_str()).send().await?;
        let status = response.status();

        if !status.is_success() {
            error!(status = %status, %url, "geolocation endpoint returned non-success status");

            let mut stdout = io::stdout();
            ctx.formatter().render_raw(
                &mut stdout,
                &format!("Oops. Something went wrong (StatusCode: {})", status.as_u16()),
            )?;
            return Ok(1);
        }

        let body = response.text().await?;
        let mut stdout = io::stdout();
        let formatter = ctx.formatter();

        if settings.get_flag("json") {
            formatter.render_raw(&mut stdout, body.trim_end())?;
            return Ok(0);
        }

        let properties: BTreeMap<String, String> = serde_json::from_str(&body)?;
        info!(properties = properties.len(), "geolocation lookup succeeded");

        let rows: Vec<(String, String)> = properties.into_iter().collect();
        formatter.render_table(&mut stdout, &rows)?;

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::bind_tokens;
    use crate::config::AppConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn context_for(server: &MockServer) -> CommandContext {
        CommandContext::new(AppConfig {
            geo_endpoint: server.uri(),
            ..Default::default()
        })
    }

    fn bound(tokens: &[&str]) -> SettingsModel {
        let raw: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        bind_tokens(&descriptor(), &raw).unwrap()
    }

    #[test]
    fn test_build_url_without_address() {
        assert_eq!(build_url("https://ipinfo.io", None), "https://ipinfo.io/geo");
    }

    #[test]
    fn test_build_url_with_address() {
        assert_eq!(
            build_url("https://ipinfo.io", Some("8.8.8.8")),
            "https://ipinfo.io/8.8.8.8/geo"
        );
    }

    #[tokio::test]
    async fn test_success_status_returns_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"country":"US","city":"Mountain View"}"#),
            )
            .mount(&server)
            .await;

        let code = IpCommand
            .execute(&bound(&[]), &context_for(&server))
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_address_becomes_path_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/8.8.8.8/geo"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"country":"US"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let code = IpCommand
            .execute(&bound(&["--address", "8.8.8.8"]), &context_for(&server))
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_non_success_status_returns_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let code = IpCommand
            .execute(&bound(&[]), &context_for(&server))
            .await
            .unwrap();
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = IpCommand.execute(&bound(&[]), &context_for(&server)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_raw_mode_skips_parsing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        // Raw mode re-emits the body verbatim, so an unparseable body
        // still succeeds.
        let code = IpCommand
            .execute(&bound(&["--json"]), &context_for(&server))
            .await
            .unwrap();
        assert_eq!(code, 0);
    }
}
