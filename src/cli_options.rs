use std::collections::HashMap;

pub struct CliOptions {
    pub scene_name: String,
    pub width: u32,
    pub height: u32,
    pub output: String,
    pub band_rows: usize,
    pub use_multi_thread: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            scene_name: "spheres".to_string(),
            width: 800,
            height: 600,
            output: "output.png".to_string(),
            band_rows: 10,
            use_multi_thread: true,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --scene <preset_name>
        --width <pixels> --height <pixels>
        --output <file.png>
        --band-rows <rows_per_progress_band>
        --use_multi_thread | --use_single_thread
        "#
    }
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut pairs: HashMap<String, Option<String>> = HashMap::new();
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    while let Some(key) = args.pop() {
        if !key.starts_with('-') {
            return Err(format!("Unrecognized key {}", key));
        }
        match args.last() {
            None => {
                pairs.insert(key, None);
            }
            Some(value) => {
                if value.starts_with('-') {
                    pairs.insert(key, None);
                } else {
                    let value = args.pop();
                    pairs.insert(key, value);
                }
            }
        }
    }
    let mut options = CliOptions::default();
    for (k, v) in pairs.into_iter() {
        match k.as_str() {
            "--use_multi_thread" => options.use_multi_thread = true,
            "--use_single_thread" => options.use_multi_thread = false,
            "--scene" => options.scene_name = require_value(&k, v)?,
            "--output" => options.output = require_value(&k, v)?,
            "--width" => options.width = parse_number(&k, v)?,
            "--height" => options.height = parse_number(&k, v)?,
            "--band-rows" => options.band_rows = parse_number(&k, v)?,
            "--help" => {
                println!("usage: {}", CliOptions::message());
            }
            _ => return Err(format!("Unrecognized key {}", k)),
        }
    }
    if options.width == 0 || options.height == 0 {
        return Err("image dimensions must be positive".to_string());
    }
    Ok(options)
}

fn require_value(key: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("{} needs a value", key))
}

fn parse_number<T: std::str::FromStr>(key: &str, value: Option<String>) -> Result<T, String> {
    let value = require_value(key, value)?;
    value
        .parse::<T>()
        .map_err(|_| format!("{}: '{}' is not a valid number", key, value))
}
