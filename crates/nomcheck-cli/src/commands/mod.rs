pub mod check;
pub mod hierarchy_loader;
pub mod parse;


/// Output format shared by all commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
