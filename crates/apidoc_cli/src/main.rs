/* # Why is the CLI minimal and hardcoded?

No argument parsing, no options:

1. **Reduces complexity**: No clap or similar dependency needed
2. **Simplifies testing**: Just run `apidoc` in a directory with apidoc.toml
3. **Clear conventions**: Always looks for `apidoc.toml` in the current directory
4. **Fast iteration**: Can add arguments later when use cases emerge

The workflow is straightforward:
1. Change to your project directory
2. Optionally create `apidoc.toml` (the built-in sample is used otherwise)
3. Run `apidoc`
4. The rendered HTML document lands next to the description file

Exit codes:
- 0: Success (document rendered and written)
- 1: Error (description file unreadable or output not writable)
*/

use std::env;
use std::process;

use apidoc_base::tracing::init_tracing;
use apidoc_base::{FilePath, PalHandle, RealPal};
use apidoc_engine::{
    ApiSpec, EditorState, RenderMoment, load_api_spec, output_file_name, render_document,
};

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Error: Failed to initialize tracing: {}", e);
        process::exit(1);
    }

    let current_dir = env::current_dir().unwrap_or_else(|e| {
        eprintln!("Error: Failed to get current directory: {}", e);
        process::exit(1);
    });

    let pal = PalHandle::new(RealPal::new(current_dir));

    let description_path = FilePath::from("apidoc.toml");
    let spec = match pal.file_exists(&description_path) {
        Ok(true) => match load_api_spec(&*pal, &description_path) {
            Ok(spec) => {
                println!("Loaded API description from {}", description_path);
                spec
            }
            Err(e) => {
                eprintln!("Error: Failed to load {}: {}", description_path, e);
                process::exit(1);
            }
        },
        Ok(false) => {
            println!("No apidoc.toml found, using the built-in sample description");
            ApiSpec::sample()
        }
        Err(e) => {
            eprintln!("Error: Failed to check for {}: {}", description_path, e);
            process::exit(1);
        }
    };

    let state = EditorState::from_spec(spec);
    let snapshot = state.spec;
    let html = render_document(&snapshot, &RenderMoment::now());

    let output_path = FilePath::from(output_file_name(&snapshot.api_info.title));
    if let Err(e) = pal.write_file(&output_path, html.as_bytes()) {
        eprintln!("Error: Failed to write {}: {}", output_path, e);
        process::exit(1);
    }

    println!(
        "Rendered {} endpoint(s) and {} error code(s) to {}",
        snapshot.endpoints.len(),
        snapshot.error_codes.len(),
        output_path
    );
}
