use anyhow::Context;
use std::env;

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn new() -> anyhow::Result<Config> {
        _ = dotenvy::dotenv();

        Ok(Config {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL is required.")?,
            port: match env::var("PORT") {
                Ok(value) => value.parse().context("PORT must be a valid port number.")?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}
