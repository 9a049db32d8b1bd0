mod renderer;

use anyhow::Result;

fn main() -> Result<()> {
    // Optional: roles for the typewriter line, one per argument.
    let roles: Vec<String> = std::env::args().skip(1).collect();
    let roles = if roles.is_empty() {
        lume_core::config::default_roles()
    } else {
        roles
    };

    renderer::run_preview(roles)
}
