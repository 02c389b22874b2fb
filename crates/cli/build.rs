use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("mdconv")
        .version("1.0.0")
        .author("mdconv contributors")
        .about("Convert between HTML and Markdown")
        .arg(clap::arg!(<INPUT> "URL to fetch, local file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-d --direction <DIRECTION> "Conversion direction")
                .value_name("DIRECTION")
                .default_value("html-to-md")
                .value_parser(["html-to-md", "md-to-html", "html-to-text"]),
        )
        .arg(
            clap::arg!(--"heading-style" <STYLE> "Heading style for generated Markdown")
                .default_value("atx")
                .value_parser(["atx", "setext"]),
        )
        .arg(clap::arg!(--"no-gfm" "Disable GitHub Flavored Markdown"))
        .arg(clap::arg!(--"no-tables" "Disable pipe tables"))
        .arg(clap::arg!(--"no-task-lists" "Disable task list items"))
        .arg(clap::arg!(--"no-strikethrough" "Disable strikethrough"))
        .arg(clap::arg!(--sample "Use the bundled sample document as input"))
        .arg(clap::arg!(--stats "Print character/word/line counts"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("10"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable verbose progress output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "mdconv", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "mdconv", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "mdconv", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "mdconv", &completions_dir).unwrap();
}
