// ============================================================================
// ÍCONOS DE MARCADORES - Fábrica pura (sin estado global)
// ============================================================================

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
    Waypoint,
}

impl MarkerKind {
    /// Primer punto = inicio, último = fin, el resto intermedios
    pub fn for_index(index: usize, len: usize) -> Self {
        if index == 0 {
            MarkerKind::Start
        } else if index + 1 == len {
            MarkerKind::End
        } else {
            MarkerKind::Waypoint
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MarkerKind::Start => "#4CAF50",
            MarkerKind::End => "#F44336",
            MarkerKind::Waypoint => "#2196F3",
        }
    }
}

/// Opciones de `L.divIcon`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSpec {
    pub html: String,
    pub class_name: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
}

pub fn marker_icon(kind: MarkerKind) -> IconSpec {
    let color = kind.color();
    let html = match kind {
        MarkerKind::Start => format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="{c}" stroke-width="2"><circle cx="12" cy="12" r="10" fill="#ffffff" stroke="{c}" stroke-width="2"/><path d="M12 8v8M8 12h8" stroke="{c}" stroke-width="2" stroke-linecap="round"/></svg>"##,
            c = color
        ),
        MarkerKind::End => format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="{c}" stroke-width="2"><circle cx="12" cy="12" r="10" fill="#ffffff" stroke="{c}" stroke-width="2"/><circle cx="12" cy="12" r="4" fill="{c}"/></svg>"##,
            c = color
        ),
        MarkerKind::Waypoint => format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="{c}" stroke-width="2"><circle cx="12" cy="12" r="8" fill="#ffffff" stroke="{c}" stroke-width="2"/></svg>"##,
            c = color
        ),
    };

    IconSpec {
        html,
        class_name: String::new(),
        icon_size: [24, 24],
        icon_anchor: [12, 12],
    }
}
