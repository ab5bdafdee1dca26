// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
                 _ 
 _ __ ___ _ __ | |
| '__/ _ \ '_ \| |
| | |  __/ |_) | |
|_|  \___| .__/|_|
         |_|       

    Remote Code Execution Client
"#;
    eprintln!("{}", banner);
}
