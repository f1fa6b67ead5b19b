use super::resources::TextureHandle;

/// Draw list rebuilt every tick, painted back to front.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn add_node(&mut self, node: SceneNode) {
        tracing::trace!(name = %node.name, "adding scene node");
        self.nodes.push(node);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub texture: TextureHandle,
    /// Top-left corner in canvas pixels.
    pub x: f32,
    pub y: f32,
}

impl SceneNode {
    pub fn sprite(name: impl Into<String>, texture: TextureHandle, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            texture,
            x,
            y,
        }
    }
}
