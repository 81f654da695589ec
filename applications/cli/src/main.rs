/// Tienda - terminal shell for the product catalog client
use clap::Parser;
use std::sync::Arc;
use tienda_screens::{
    AddProductScreen, EditProductScreen, HomeScreen, LoginScreen, Navigator, RegisterScreen, Route,
};
use tienda_server_client::{ServerConfig, TiendaClient};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tienda")]
#[command(about = "Terminal client for the Tienda product catalog", long_about = None)]
struct Cli {
    /// Base URL of the catalog server
    #[arg(long, env = "TIENDA_SERVER_URL", default_value = "http://127.0.0.1:3000")]
    server_url: String,
}

/// What a screen asks the navigator to do next.
enum ShellAction {
    Goto(Route),
    Reset(Route),
    Up,
    Quit,
}

type InputLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tienda=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let client = Arc::new(TiendaClient::new(ServerConfig::new(&cli.server_url))?);
    tracing::info!("Using catalog server at {}", cli.server_url);

    run(client).await
}

async fn run(client: Arc<TiendaClient>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut navigator = Navigator::new();

    loop {
        let action = match navigator.current().clone() {
            Route::Login => login_screen(&client, &mut lines).await?,
            Route::Register => register_screen(&client, &mut lines).await?,
            Route::Home => home_screen(&client, &mut lines).await?,
            Route::AddProduct => add_product_screen(&client, &mut lines).await?,
            Route::EditProduct { product_id } => {
                edit_product_screen(&client, product_id, &mut lines).await?
            }
        };

        match action {
            ShellAction::Goto(route) => navigator.navigate(route),
            ShellAction::Reset(route) => navigator.reset_to(route),
            ShellAction::Up => {
                if !navigator.navigate_up() {
                    break;
                }
            }
            ShellAction::Quit => break,
        }
    }

    println!("Hasta luego.");
    Ok(())
}

async fn read_command(lines: &mut InputLines, prompt: &str) -> anyhow::Result<Option<String>> {
    use std::io::Write;
    print!("{prompt}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

fn show_and_clear_error(error: Option<&str>) -> bool {
    if let Some(message) = error {
        println!("! {message}");
        true
    } else {
        false
    }
}

async fn login_screen(
    client: &Arc<TiendaClient>,
    lines: &mut InputLines,
) -> anyhow::Result<ShellAction> {
    let mut screen = LoginScreen::new(Arc::clone(client));

    println!();
    println!("== Login ==");
    println!("commands: email <value> | password <value> | submit | register | quit");

    loop {
        if show_and_clear_error(screen.error()) {
            screen.dismiss_error();
        }

        let Some(line) = read_command(lines, "login> ").await? else {
            return Ok(ShellAction::Quit);
        };

        match line.trim().split_once(' ') {
            Some(("email", value)) => screen.set_email(value.trim()),
            Some(("password", value)) => screen.set_password(value.trim()),
            None if line.trim() == "submit" => {
                if let Some(route) = screen.submit().await {
                    return Ok(ShellAction::Goto(route));
                }
            }
            None if line.trim() == "register" => {
                return Ok(ShellAction::Goto(screen.register_route()));
            }
            None if line.trim() == "quit" => return Ok(ShellAction::Quit),
            _ => println!("unrecognized command"),
        }
    }
}

async fn register_screen(
    client: &Arc<TiendaClient>,
    lines: &mut InputLines,
) -> anyhow::Result<ShellAction> {
    let mut screen = RegisterScreen::new(Arc::clone(client));

    println!();
    println!("== Register ==");
    println!("commands: name <value> | email <value> | password <value> | submit | back");

    loop {
        if show_and_clear_error(screen.error()) {
            screen.dismiss_error();
        }

        let Some(line) = read_command(lines, "register> ").await? else {
            return Ok(ShellAction::Quit);
        };

        match line.trim().split_once(' ') {
            Some(("name", value)) => screen.set_name(value.trim()),
            Some(("email", value)) => screen.set_email(value.trim()),
            Some(("password", value)) => screen.set_password(value.trim()),
            None if line.trim() == "submit" => {
                if let Some(route) = screen.submit().await {
                    println!("Account created, please log in.");
                    return Ok(ShellAction::Goto(route));
                }
            }
            None if line.trim() == "back" => return Ok(ShellAction::Up),
            _ => println!("unrecognized command"),
        }
    }
}

fn print_products(screen: &HomeScreen) {
    if screen.products().is_empty() {
        if screen.search_query().is_empty() {
            println!("(no products available)");
        } else {
            println!("(no results for: {})", screen.search_query());
        }
        return;
    }

    for product in screen.products() {
        println!(
            "  #{:<4} {:<24} {:>10}  stock {:<4} {}",
            product.id, product.name, product.price, product.stock, product.image_url
        );
    }
}

async fn home_screen(
    client: &Arc<TiendaClient>,
    lines: &mut InputLines,
) -> anyhow::Result<ShellAction> {
    let mut screen = HomeScreen::new(Arc::clone(client));
    screen.enter().await;

    println!();
    println!("== Products ==");
    println!("commands: search <name> | clear | add | edit <id> | delete <id> | back | quit");

    loop {
        if show_and_clear_error(screen.error()) {
            screen.dismiss_error();
        }
        print_products(&screen);

        let Some(line) = read_command(lines, "home> ").await? else {
            return Ok(ShellAction::Quit);
        };

        match line.trim().split_once(' ') {
            Some(("search", query)) => screen.set_search_query(query.trim()).await,
            Some(("edit", id)) => match id.trim().parse::<i64>() {
                Ok(id) => return Ok(ShellAction::Goto(screen.edit_route(id))),
                Err(_) => println!("edit takes a product id"),
            },
            Some(("delete", id)) => match id.trim().parse::<i64>() {
                Ok(id) => {
                    screen.request_delete(id);
                    let confirm = read_command(lines, "delete this product? (y/n) ").await?;
                    match confirm.as_deref().map(str::trim) {
                        Some("y") | Some("yes") => screen.confirm_delete().await,
                        _ => screen.cancel_delete(),
                    }
                }
                Err(_) => println!("delete takes a product id"),
            },
            None if line.trim() == "clear" => screen.set_search_query("").await,
            None if line.trim() == "add" => return Ok(ShellAction::Goto(screen.add_route())),
            None if line.trim() == "back" => return Ok(ShellAction::Up),
            None if line.trim() == "quit" => return Ok(ShellAction::Quit),
            _ => println!("unrecognized command"),
        }
    }
}

async fn add_product_screen(
    client: &Arc<TiendaClient>,
    lines: &mut InputLines,
) -> anyhow::Result<ShellAction> {
    let mut screen = AddProductScreen::new(Arc::clone(client));

    println!();
    println!("== Add product ==");
    println!(
        "commands: name <value> | description <value> | price <value> | image <path> | no-image | save | back"
    );

    loop {
        if show_and_clear_error(screen.error()) {
            screen.dismiss_error();
        }

        let Some(line) = read_command(lines, "add> ").await? else {
            return Ok(ShellAction::Quit);
        };

        match line.trim().split_once(' ') {
            Some(("name", value)) => screen.set_name(value.trim()),
            Some(("description", value)) => screen.set_description(value.trim()),
            Some(("price", value)) => screen.set_price(value.trim()),
            Some(("image", value)) => screen.attach_image(value.trim()),
            None if line.trim() == "no-image" => screen.clear_image(),
            None if line.trim() == "save" => {
                if let Some(route) = screen.save().await {
                    println!("Product saved.");
                    return Ok(ShellAction::Reset(route));
                }
            }
            None if line.trim() == "back" => return Ok(ShellAction::Up),
            _ => println!("unrecognized command"),
        }
    }
}

async fn edit_product_screen(
    client: &Arc<TiendaClient>,
    product_id: i64,
    lines: &mut InputLines,
) -> anyhow::Result<ShellAction> {
    let mut screen = EditProductScreen::new(Arc::clone(client), product_id);
    screen.load().await;

    println!();
    println!("== Edit product #{product_id} ==");
    println!("commands: name <value> | description <value> | price <value> | save | back");

    loop {
        if show_and_clear_error(screen.error()) {
            screen.dismiss_error();
        }

        if screen.is_saved() {
            println!("Product updated.");
            return Ok(ShellAction::Reset(screen.acknowledge_saved()));
        }

        println!(
            "  name: {} | description: {} | price: {}",
            screen.name(),
            screen.description(),
            screen.price()
        );

        let Some(line) = read_command(lines, "edit> ").await? else {
            return Ok(ShellAction::Quit);
        };

        match line.trim().split_once(' ') {
            Some(("name", value)) => screen.set_name(value.trim()),
            Some(("description", value)) => screen.set_description(value.trim()),
            Some(("price", value)) => screen.set_price(value.trim()),
            None if line.trim() == "save" => screen.save().await,
            None if line.trim() == "back" => return Ok(ShellAction::Up),
            _ => println!("unrecognized command"),
        }
    }
}
