//! View bindings and the rendering model
//!
//! The cart UI is addressed through a fixed set of named anchors. A host
//! resolves them once into [`ViewBindings`]; the controller then only emits
//! updates for anchors that are actually mounted.
//!
//! ```text
//! cartToggle ──open──▶ cartSidebar ◀──close── cartClose / cartOverlay
//!                      ├── cartItemsList   (RenderedLine per cart line)
//!                      ├── cartEmpty       (placeholder when item_count == 0)
//!                      └── cartTotal
//! cartCount   badge, visible while count > 0, bounces on increase
//! ```

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;

use crate::error::{StorefrontError, StorefrontResult};
use crate::money::format_price;
use crate::types::{CartLine, CartState, LineId};

/// Icon used when a line has neither image nor icon token
pub const DEFAULT_ICON: &str = "fas fa-box";

/// Total shown for an empty cart
pub const EMPTY_TOTAL: &str = "$0";

/// A named UI element the cart attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Anchor {
    Toggle,
    Sidebar,
    Overlay,
    Close,
    Badge,
    LineList,
    Total,
    EmptyPlaceholder,
}

impl Anchor {
    pub const ALL: [Anchor; 8] = [
        Anchor::Toggle,
        Anchor::Sidebar,
        Anchor::Overlay,
        Anchor::Close,
        Anchor::Badge,
        Anchor::LineList,
        Anchor::Total,
        Anchor::EmptyPlaceholder,
    ];

    /// Anchors without which the cart is disabled
    pub const REQUIRED: [Anchor; 2] = [Anchor::Toggle, Anchor::Sidebar];

    /// Element id of the anchor
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Toggle => "cartToggle",
            Anchor::Sidebar => "cartSidebar",
            Anchor::Overlay => "cartOverlay",
            Anchor::Close => "cartClose",
            Anchor::Badge => "cartCount",
            Anchor::LineList => "cartItemsList",
            Anchor::Total => "cartTotal",
            Anchor::EmptyPlaceholder => "cartEmpty",
        }
    }

    pub fn from_id(id: &str) -> Option<Anchor> {
        Anchor::ALL.into_iter().find(|anchor| anchor.id() == id)
    }

    pub fn is_required(&self) -> bool {
        Anchor::REQUIRED.contains(self)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Anything that can say whether an anchor is mounted
pub trait AnchorLookup {
    fn has_anchor(&self, anchor: Anchor) -> bool;
}

impl AnchorLookup for [Anchor] {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        self.contains(&anchor)
    }
}

impl<const N: usize> AnchorLookup for [Anchor; N] {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        self.contains(&anchor)
    }
}

/// Element ids present on a page
impl AnchorLookup for HashSet<String> {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        self.contains(anchor.id())
    }
}

/// The anchors a controller was attached to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBindings {
    mounted: BTreeSet<Anchor>,
}

impl ViewBindings {
    /// Resolve bindings once, failing if a required anchor is absent
    pub fn resolve<L: AnchorLookup + ?Sized>(lookup: &L) -> StorefrontResult<Self> {
        let mounted: BTreeSet<Anchor> = Anchor::ALL
            .into_iter()
            .filter(|anchor| lookup.has_anchor(*anchor))
            .collect();

        let missing: Vec<Anchor> = Anchor::REQUIRED
            .into_iter()
            .filter(|anchor| !mounted.contains(anchor))
            .collect();

        if !missing.is_empty() {
            return Err(StorefrontError::MissingAnchors(missing));
        }
        Ok(Self { mounted })
    }

    /// Every anchor mounted
    pub fn all() -> Self {
        Self {
            mounted: Anchor::ALL.into_iter().collect(),
        }
    }

    pub fn has(&self, anchor: Anchor) -> bool {
        self.mounted.contains(&anchor)
    }

    /// Line list, total and empty placeholder are all needed to render
    pub fn can_render_lines(&self) -> bool {
        self.has(Anchor::LineList) && self.has(Anchor::Total) && self.has(Anchor::EmptyPlaceholder)
    }

    /// Optional anchors that are not mounted
    pub fn missing_optional(&self) -> Vec<Anchor> {
        Anchor::ALL
            .into_iter()
            .filter(|anchor| !anchor.is_required() && !self.has(*anchor))
            .collect()
    }
}

/// What the cart badge shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BadgeDisplay {
    pub count: u32,
    pub visible: bool,
    /// Play the bounce animation for this update
    pub bounce: bool,
}

impl BadgeDisplay {
    /// Badge after a new count arrives; only an increase bounces.
    ///
    /// Repeating the same count keeps the current animation state, so the
    /// reload that follows an add does not cancel its bounce.
    pub fn next(&self, count: u32) -> Self {
        let bounce = if count == self.count {
            self.bounce
        } else {
            count > self.count
        };
        Self {
            count,
            visible: count > 0,
            bounce,
        }
    }

    pub fn text(&self) -> String {
        self.count.to_string()
    }
}

/// Image or icon fallback for a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LineMedia {
    Image { src: String, alt: String },
    Icon(String),
}

/// One cart line ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    pub id: LineId,
    pub media: LineMedia,
    pub name: String,
    /// Localized unit price, e.g. `$10.000`
    pub price_text: String,
    pub quantity: u32,
}

impl RenderedLine {
    pub fn from_line(line: &CartLine) -> Self {
        let media = match line.product_image.as_deref().filter(|src| !src.is_empty()) {
            Some(src) => LineMedia::Image {
                src: src.to_string(),
                alt: line.product_name.clone(),
            },
            None => LineMedia::Icon(
                line.product_icon
                    .clone()
                    .filter(|icon| !icon.is_empty())
                    .unwrap_or_else(|| DEFAULT_ICON.to_string()),
            ),
        };

        Self {
            id: line.id,
            media,
            name: line.product_name.clone(),
            price_text: format_price(line.price),
            quantity: line.quantity,
        }
    }
}

/// Sidebar body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CartBody {
    /// Placeholder instead of the list
    Empty,
    Lines(Vec<RenderedLine>),
}

/// Sidebar contents derived from one fetched [`CartState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCart {
    pub body: CartBody,
    pub total_text: String,
}

impl RenderedCart {
    pub fn from_state(state: &CartState) -> Self {
        if state.is_empty() {
            return Self {
                body: CartBody::Empty,
                total_text: EMPTY_TOTAL.to_string(),
            };
        }

        Self {
            body: CartBody::Lines(state.items.iter().map(RenderedLine::from_line).collect()),
            total_text: state.formatted_total.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, CartBody::Empty)
    }

    pub fn lines(&self) -> &[RenderedLine] {
        match &self.body {
            CartBody::Empty => &[],
            CartBody::Lines(lines) => lines,
        }
    }
}

/// Everything currently shown by the cart UI
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CartDisplay {
    pub badge: BadgeDisplay,
    pub sidebar_open: bool,
    /// Page scroll is suppressed while the sidebar is open
    pub scroll_locked: bool,
    /// Last rendered sidebar contents, `None` until the first render
    pub rendered: Option<RenderedCart>,
}
