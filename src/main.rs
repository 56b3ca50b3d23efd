// SPDX-License-Identifier: MPL-2.0
use dicom_drop::app::{self, paths, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let lang = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            log::warn!("ignoring --lang: {err}");
            None
        }
    };
    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            log::warn!("ignoring --config-dir: {err}");
            None
        }
    };
    paths::init_cli_overrides(config_dir);

    let mut free = args.finish().into_iter();
    let file_path = free.next().map(PathBuf::from);
    for extra in free {
        log::debug!("ignoring extra argument {}", extra.to_string_lossy());
    }

    app::run(Flags { lang, file_path })
}
