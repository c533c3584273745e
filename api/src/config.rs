use clap::Parser;

#[derive(Debug, Parser)]
pub struct Config {
    #[clap(short = 'H', long, env, default_value_t = String::from("127.0.0.1"))]
    pub host: String,
    #[clap(short, long, env, default_value_t = 7822)]
    pub port: u16,

    #[clap(env, default_value_t = String::from("production"))]
    pub env: String,

    #[clap(long = "db", env)]
    pub database_url: String,

    #[clap(long, env, default_value_t = 32)]
    pub database_pool_size: usize,
}
