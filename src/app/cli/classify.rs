use std::path::PathBuf;

use crate::app::api;
use crate::domain::AppError;

pub fn run_classify(path: &str, config: Option<PathBuf>) -> Result<(), AppError> {
    let result = api::classify(path, config.as_deref())?;

    println!("path: {}", result.path);
    println!("categories: {}", result.categories);
    match result.primary {
        Some(primary) => println!("primary: {}", primary),
        None => println!("primary: unrecognized"),
    }
    println!("base name: {}", result.base_name.as_deref().unwrap_or("-"));
    for (command, sibling) in &result.siblings {
        println!("{}: {}", command, sibling.as_deref().unwrap_or("-"));
    }
    Ok(())
}
