use apprentice_watch_web::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("apprenticewatch error: {err}");
        std::process::exit(1);
    }
}
