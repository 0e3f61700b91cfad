use anyhow::{Context, Result, ensure};

use crate::config::RenderConfig;
use crate::coords::{Viewport, Window};
use crate::geometry::Shape;
use crate::object::{Object, ObjectId};
use crate::surface::DrawSurface;

use super::FrameStats;

/// Ordered collection of drawable objects.
///
/// Objects are drawn in insertion order. Ids are assigned on insertion and
/// never reused within one display file.
#[derive(Debug, Default)]
pub struct DisplayFile {
    objects: Vec<Object>,
    next_id: u32,
}

impl DisplayFile {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new visible object and returns its id.
    pub fn add(&mut self, name: impl Into<String>, shape: impl Into<Shape>) -> ObjectId {
        let id = ObjectId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let object = Object::new(id, name, shape);
        log::debug!("added {} {} ({})", object.kind(), id, object.name());
        self.objects.push(object);
        id
    }

    /// Removes an object, preserving the order of the rest.
    pub fn remove(&mut self, id: ObjectId) -> Option<Object> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        let object = self.objects.remove(index);
        log::debug!("removed {} {} ({})", object.kind(), id, object.name());
        Some(object)
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.iter().find(|o| o.id() == id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// First object with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name() == name)
    }

    /// Sets visibility. Returns `false` when the id is unknown.
    pub fn set_visible(&mut self, id: ObjectId, visible: bool) -> bool {
        match self.get_mut(id) {
            Some(o) => {
                o.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Objects in insertion (paint) order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Object> {
        self.objects.iter_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Removes every object. Id assignment continues where it left off.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Runs one frame pass.
    ///
    /// For each visible object, in order: refresh the cache through
    /// `window.normalize()`, clip it when `config.clipping` is set, then draw
    /// through `viewport.ndc_to_device()`. The first surface error aborts the
    /// pass; objects already drawn stay drawn.
    pub fn render<S>(
        &mut self,
        window: &Window,
        viewport: &Viewport,
        config: &RenderConfig,
        surface: &mut S,
    ) -> Result<FrameStats>
    where
        S: DrawSurface + ?Sized,
    {
        ensure!(viewport.is_valid(), "invalid viewport {:?}", viewport);

        let normalize = window.normalize();
        let device = viewport.ndc_to_device();
        let mut stats = FrameStats::default();

        for object in &mut self.objects {
            if !object.visible {
                stats.hidden += 1;
                continue;
            }

            object.update_scn(&normalize);
            if config.clipping && !object.clip(config.clip_region) {
                stats.culled += 1;
                continue;
            }

            let drawn = object
                .draw_with_radius(&device, surface, config.point_radius)
                .with_context(|| {
                    format!("failed to draw {} {} ({})", object.kind(), object.id(), object.name())
                })?;

            if drawn {
                stats.drawn += 1;
            } else {
                stats.culled += 1;
            }
        }

        log::debug!(
            "frame: {} objects, {} drawn, {} hidden, {} culled",
            stats.total(),
            stats.drawn,
            stats.hidden,
            stats.culled
        );
        Ok(stats)
    }
}
