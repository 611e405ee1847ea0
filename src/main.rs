use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match docassist_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("docassist: {e}");
            ExitCode::FAILURE
        }
    }
}
