use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志系统
///
/// `RUST_LOG` 优先，未设置时使用传入的默认过滤器。重复初始化会报错，
/// 由组合根保证只调用一次。
pub fn setup_logging(default_filter: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
