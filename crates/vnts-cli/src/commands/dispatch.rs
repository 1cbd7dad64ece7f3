use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Org { action } => commands::org::handle(&action, ctx, flags).await,
        Commands::Open(args) => commands::open::handle(&args, ctx, flags).await,
        Commands::Branch { action } => commands::branch::handle(&action, ctx, flags).await,
        Commands::Product { action } => commands::product::handle(&action, ctx, flags).await,
        Commands::Seller { action } => commands::seller::handle(&action, ctx, flags).await,
        Commands::Client { action } => commands::client::handle(&action, ctx, flags).await,
        Commands::PaymentMethod { action } => {
            commands::payment_method::handle(&action, ctx, flags).await
        }
        Commands::Sale { action } => commands::sale::handle(&action, ctx, flags).await,
        Commands::Report { action } => commands::report::handle(&action, ctx, flags).await,
        Commands::Config { .. } => {
            unreachable!("config is pre-dispatched in main")
        }
    }
}
