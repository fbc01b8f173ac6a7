use serde::Deserialize;
use std::net::SocketAddr;
use url::Url;

#[derive(Deserialize, Debug)]
pub struct NetConfig {
    pub bind: SocketAddr,
}

#[derive(Deserialize, Debug)]
pub struct ContentConfig {
    /// Root of the remote content API, e.g.
    /// `https://example.com/wp-json/wp/v2`.
    pub api_base: Url,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub net: NetConfig,
    pub content: ContentConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_example_config() {
        let config: Config = toml::from_str(
            r#"
            [net]
            bind = "127.0.0.1:3000"

            [content]
            api_base = "https://example.com/wp-json/wp/v2"
            "#,
        )
        .unwrap();
        assert_eq!(config.net.bind.port(), 3000);
        assert_eq!(config.content.api_base.path(), "/wp-json/wp/v2");
    }
}
