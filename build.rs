use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");

    let content = fs::read_to_string(CONFIG_PATH).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {e}"),
    };

    for section in ["site", "build"] {
        if !table.get(section).is_some_and(toml::Value::is_table) {
            panic!("default_config.toml is missing the [{section}] table");
        }
    }

    let on_error = table
        .get("build")
        .and_then(|build| build.get("on_error"))
        .and_then(toml::Value::as_str);
    if !matches!(on_error, Some("abort" | "skip")) {
        panic!("default_config.toml: build.on_error must be \"abort\" or \"skip\"");
    }
}
