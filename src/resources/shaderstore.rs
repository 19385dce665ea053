//! Shader storage resource.
//!
//! Stores loaded shaders keyed by string IDs. This is a `NonSend` resource
//! because shaders are tied to the OpenGL context.

use log::{info, warn};
use raylib::ffi;
use raylib::prelude::{RaylibHandle, RaylibThread, Shader};
use rustc_hash::FxHashMap;

/// Key of the grayscale shader used for the world pass.
pub const MONOCHROME: &str = "monochrome";

const MONOCHROME_FS: &str = r#"#version 330
in vec2 fragTexCoord;
in vec4 fragColor;
uniform sampler2D texture0;
uniform vec4 colDiffuse;
out vec4 finalColor;
void main() {
    vec4 texel = texture(texture0, fragTexCoord) * colDiffuse * fragColor;
    float gray = dot(texel.rgb, vec3(0.22, 0.707, 0.071));
    finalColor = vec4(gray, gray, gray, texel.a);
}
"#;

pub struct ShaderStore {
    shaders: FxHashMap<String, Shader>,
}

impl ShaderStore {
    pub fn new() -> Self {
        Self {
            shaders: FxHashMap::default(),
        }
    }

    /// Compile the built-in shaders. A shader that fails to compile is left
    /// out and its effect is skipped.
    pub fn load_builtin(rl: &mut RaylibHandle, thread: &RaylibThread) -> Self {
        let mut store = Self::new();
        let shader = rl.load_shader_from_memory(thread, None, Some(MONOCHROME_FS));
        if unsafe { ffi::IsShaderValid(*shader) } {
            info!("Compiled '{}' shader", MONOCHROME);
            store.add(MONOCHROME, shader);
        } else {
            warn!("Could not compile '{}' shader, grayscale disabled", MONOCHROME);
        }
        store
    }

    /// If a shader with the same ID already exists, it will be replaced.
    pub fn add(&mut self, id: &str, shader: Shader) {
        self.shaders.insert(id.to_string(), shader);
    }

    pub fn get(&self, id: &str) -> Option<&Shader> {
        self.shaders.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.shaders.contains_key(id)
    }
}

impl Default for ShaderStore {
    fn default() -> Self {
        Self::new()
    }
}
