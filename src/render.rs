use crate::config::GalleryOptions;
use crate::dom;
use crate::focus::{Rect, RectMeasurer};
use crate::geometry::TilePlacement;
use crate::rotation::{sphere_transform, tile_transform, RotationState};
use crate::viewport;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

pub struct Tile {
    pub element: web::HtmlElement,
    pub image: web::HtmlImageElement,
    pub placement: TilePlacement,
}

/// The rendered gallery subtree: a perspective viewport, one sphere container
/// carrying the global rotation, and a static set of tile elements. Sizes and
/// depth all derive from the `--radius` variable on the root, so a resize only
/// rewrites two CSS variables.
pub struct Stage {
    pub host: web::HtmlElement,
    pub root: web::HtmlElement,
    pub sphere: web::HtmlElement,
    pub tiles: Vec<Tile>,
    radius: Rc<Cell<f64>>,
}

/// Re-derive the radius and the tile span from the host's current size and
/// push them as CSS variables on the root. Shared between mount, the window
/// resize listener, and the stage.
pub fn sync_stage_size(
    host: &web::HtmlElement,
    root: &web::HtmlElement,
    radius_cell: &Cell<f64>,
    options: &GalleryOptions,
) -> f64 {
    let width = host.client_width() as f64;
    let height = host.client_height() as f64;
    let radius = viewport::sphere_radius(width, height, options);
    radius_cell.set(radius);
    dom::set_style(root, "--radius", &format!("{:.2}px", radius));
    dom::set_style(
        root,
        "--tile-span",
        &format!("{:.2}px", viewport::tile_span_px(radius, options.segments)),
    );
    radius
}

impl Stage {
    pub fn build(
        document: &web::Document,
        host: web::HtmlElement,
        placements: &[TilePlacement],
        options: &GalleryOptions,
    ) -> anyhow::Result<Self> {
        host.set_inner_html("");

        let root = dom::make_div(document, "dome-root")
            .ok_or_else(|| anyhow::anyhow!("could not create gallery root"))?;
        dom::set_style(&root, "position", "absolute");
        dom::set_style(&root, "inset", "0");
        dom::set_style(&root, "overflow", "hidden");
        dom::set_style(&root, "touch-action", "none");
        dom::set_style(&root, "user-select", "none");
        dom::set_style(&root, "perspective", "calc(var(--radius) * 2)");
        dom::set_style(&root, "perspective-origin", "50% 50%");

        let sphere = dom::make_div(document, "dome-sphere")
            .ok_or_else(|| anyhow::anyhow!("could not create sphere container"))?;
        dom::set_style(&sphere, "position", "absolute");
        dom::set_style(&sphere, "left", "50%");
        dom::set_style(&sphere, "top", "50%");
        dom::set_style(&sphere, "transform-style", "preserve-3d");

        let mut tiles = Vec::with_capacity(placements.len());
        for (index, placement) in placements.iter().enumerate() {
            let element = dom::make_div(document, "dome-tile")
                .ok_or_else(|| anyhow::anyhow!("could not create tile"))?;
            _ = element.set_attribute("data-index", &index.to_string());
            dom::set_style(&element, "position", "absolute");
            dom::set_style(&element, "left", "0");
            dom::set_style(&element, "top", "0");
            dom::set_style(&element, "width", "var(--tile-span)");
            dom::set_style(&element, "height", "var(--tile-span)");
            dom::set_style(&element, "transform-origin", "50% 50%");
            dom::set_style(&element, "backface-visibility", "hidden");
            dom::set_style(
                &element,
                "transform",
                &tile_transform(placement, options.segments),
            );

            let image = dom::make_image(document, &placement.source, &placement.alt_text)
                .ok_or_else(|| anyhow::anyhow!("could not create tile image"))?;
            let img_el: &web::HtmlElement = image.as_ref();
            dom::set_style(img_el, "width", "100%");
            dom::set_style(img_el, "height", "100%");
            dom::set_style(img_el, "object-fit", "cover");
            dom::set_style(img_el, "pointer-events", "none");
            dom::set_style(
                img_el,
                "border-radius",
                &format!("{}px", options.tile_radius_px),
            );
            if options.grayscale {
                dom::set_style(img_el, "filter", "grayscale(1)");
            }

            _ = element.append_child(image.as_ref());
            _ = sphere.append_child(&element);
            tiles.push(Tile {
                element,
                image,
                placement: placement.clone(),
            });
        }

        _ = root.append_child(&sphere);
        _ = host.append_child(&root);

        Ok(Self {
            host,
            root,
            sphere,
            tiles,
            radius: Rc::new(Cell::new(options.min_radius)),
        })
    }

    pub fn resize(&self, options: &GalleryOptions) -> f64 {
        sync_stage_size(&self.host, &self.root, &self.radius, options)
    }

    pub fn radius_handle(&self) -> Rc<Cell<f64>> {
        self.radius.clone()
    }

    pub fn radius(&self) -> f64 {
        self.radius.get()
    }

    pub fn apply_rotation(&self, rotation: &RotationState) {
        dom::set_style(&self.sphere, "transform", &sphere_transform(rotation));
    }

    /// Hide keeps the tile in layout so its rect survives for the close
    /// animation.
    pub fn set_tile_hidden(&self, index: usize, hidden: bool) {
        if let Some(tile) = self.tiles.get(index) {
            dom::set_style(
                &tile.element,
                "visibility",
                if hidden { "hidden" } else { "visible" },
            );
        }
    }

    /// Brief fade-in when a tile returns after the viewer closes.
    pub fn fade_tile_back(&self, index: usize) {
        if let Some(tile) = self.tiles.get(index) {
            dom::set_style(&tile.element, "visibility", "visible");
            dom::set_style(&tile.element, "opacity", "0");
            dom::set_style(
                &tile.element,
                "transition",
                &format!("opacity {}ms ease", crate::constants::TILE_RESTORE_FADE_MS),
            );
            // Styles flush before the next frame sets the target value.
            let el = tile.element.clone();
            _ = el.offset_width();
            dom::set_style(&tile.element, "opacity", "1");
        }
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }
}

impl RectMeasurer for Stage {
    fn tile_rect(&self, index: usize) -> Option<Rect> {
        let tile = self.tiles.get(index)?;
        dom::element_rect(tile.element.as_ref())
    }

    fn viewport_rect(&self) -> Rect {
        dom::element_rect(self.root.as_ref()).unwrap_or_default()
    }
}
