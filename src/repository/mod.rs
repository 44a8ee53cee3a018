mod git;
mod pack_listing;
mod path_resolver;

pub use git::{command_line, git_args, GitRunner, SystemGit};
pub use pack_listing::{pack_index_files, parse_verify_pack_line, PackListing};
pub use path_resolver::{assign_paths, resolve_paths, ResolveStats};
