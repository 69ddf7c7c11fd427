fn main() {
    l10n_migrate::app::cli::run();
}
