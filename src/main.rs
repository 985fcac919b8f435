//! application entry point

use crate::server::model::config::ServerConfig;
use derive_more::Display;
use log::info;
use std::env;
use std::path::Path;
use std::str::FromStr;

mod server;

const DOTENV_LOADING_FAILED_MSG: &str = "failed to load envs from dotenv files, aborting";

#[actix_web::main()]
async fn main() -> std::io::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    match env {
        Env::Prod | Env::Stg => {} // provided by the deployment
        Env::Dev => dotenvy::from_path(Path::new(".env.dev"))
            .map_err(|e| std::io::Error::other(format!("{DOTENV_LOADING_FAILED_MSG}: {e}")))?,
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // c. run app
    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;

    info!("App is starting in env={}, config={:?}", env, config);

    server::run(config).await
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn env_from_str() {
        assert!(matches!("dev".parse::<Env>(), Ok(Env::Dev)));
        assert!(matches!("stg".parse::<Env>(), Ok(Env::Stg)));
        assert!(matches!("prod".parse::<Env>(), Ok(Env::Prod)));
        assert_eq!("qa".parse::<Env>().unwrap_err(), "Invalid Env: qa");
    }
}
