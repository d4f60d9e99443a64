use std::borrow::Cow;

use indicatif::{ProgressBar, ProgressStyle};

pub fn progress_bar(len: u64, message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("##-"),
    );
    bar.set_message(message);

    bar
}
