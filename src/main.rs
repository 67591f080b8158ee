use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;

use course_miniapp::api::HttpCatalogApi;
use course_miniapp::cli::{Cli, Commands};
use course_miniapp::core::{config, init_logger, log_client_configuration, ClientConfig};
use course_miniapp::webapp::{Action, InitData, Page, StaticHost, View, ViewController};

/// Terminal driver for the Mini App view layer
///
/// Runs the same controller the WebView embedding uses against a real
/// backend and prints the resulting page.
///
/// # Errors
/// Returns an error if initialization fails (logging, init data, HTTP client).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env before clap reads env fallbacks
    let _ = dotenv();

    let cli = Cli::parse_args();

    init_logger(&config::LOG_FILE_PATH, cli.verbose)?;

    let client_config = ClientConfig::from_env()?;
    let init_data = cli.init_data.as_deref().map(InitData::parse).transpose()?;
    log_client_configuration(&client_config, init_data.is_some());

    let host = Arc::new(StaticHost::new(init_data));
    let api = Arc::new(HttpCatalogApi::new(&client_config)?);
    let controller = ViewController::new(api, host.clone(), client_config);

    match cli.command {
        Some(Commands::Courses) | None => {
            controller.start().await;
            print_page(&controller.page().await);
        }
        Some(Commands::Topics {
            course_id,
            title,
            filter,
        }) => {
            let title = title.unwrap_or_else(|| format!("Курс {}", course_id));
            controller.load_topics(course_id, &title).await;
            if let Some(query) = filter {
                let shown = controller.filter_topics(&query).await;
                log::info!("Filter {:?} left {} topics visible", query, shown);
            }
            print_page(&controller.page().await);
        }
        Some(Commands::Request { file_id }) => {
            controller.request_file(&file_id).await;
            print_page(&controller.page().await);
            // The success haptic only fires once the backend accepted the request
            if host.haptic_count() == 0 {
                anyhow::bail!("File {} was not delivered", file_id);
            }
        }
        Some(Commands::Browse) => run_browse(&controller).await,
    }

    Ok(())
}

/// Opens every course of the list one after another
async fn run_browse(controller: &ViewController) {
    controller.start().await;
    let page = controller.page().await;
    print_page(&page);

    for action in page.course_actions() {
        if let Action::OpenCourse { .. } = action {
            controller.activate(&action).await;
            print_page(&controller.page().await);
            controller.show_courses().await;
        }
    }
}

fn print_page(page: &Page) {
    let view = page.visible_view();
    println!("── {} ──", view);
    println!("{}", page.text_content(view));

    if view == View::Topics {
        let file_ids: Vec<String> = page
            .file_actions()
            .into_iter()
            .filter_map(|action| match action {
                Action::RequestFile { file_id } => Some(file_id),
                Action::OpenCourse { .. } => None,
            })
            .collect();
        if !file_ids.is_empty() {
            println!("file ids: {}", file_ids.join(", "));
        }
    }

    if page.notification.is_visible() {
        let marker = if page.notification.is_error() { "!" } else { "i" };
        println!("[{}] {}", marker, page.notification.text());
    }
}
