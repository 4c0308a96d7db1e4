/* # What does apidoc_engine provide?

apidoc_engine holds the domain logic of the documentation generator:
- the API description data model (model)
- the pure action-based editor state (editor, handle)
- the HTML document renderer (render)
- loading API descriptions from TOML or JSON files (config)
*/

pub mod config;
pub mod editor;
pub mod handle;
pub mod model;
pub mod render;

pub use config::load_api_spec;
pub use editor::{
    ApiInfoField, AuthInfoField, EditorAction, EditorState, EndpointField, ErrorCodeField,
    ParameterField,
};
pub use handle::EditorHandle;
pub use model::{
    ApiInfo, ApiSpec, AuthInfo, Endpoint, EndpointId, ErrorCode, Parameter, Response,
};
pub use render::{
    RenderMoment, StatusTone, method_badge_style, output_file_name, render_document, status_tone,
};
