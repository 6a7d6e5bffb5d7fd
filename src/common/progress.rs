use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over papers. Hidden when there is a single paper.
pub fn create_paper_progress_bar(total_papers: u64) -> ProgressBar {
    if total_papers <= 1 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total_papers);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} papers ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
    );
    pb
}
