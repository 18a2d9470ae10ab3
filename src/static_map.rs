use crate::url_builder::{build_url, QueryParams};

/// Region code for France
pub const REGION_FRANCE: &str = "fr";

/// Map type options for the Static Maps API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapType {
    RoadMap,
    Satellite,
    Terrain,
    Hybrid,
}

impl MapType {
    pub fn as_api_str(self) -> &'static str {
        match self {
            MapType::RoadMap => "roadmap",
            MapType::Satellite => "satellite",
            MapType::Terrain => "terrain",
            MapType::Hybrid => "hybrid",
        }
    }
}

/// Image format options for the Static Maps API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Png8,
    Png32,
    Gif,
    Jpg,
    JpgBaseline,
}

impl ImageFormat {
    pub fn as_api_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Png8 => "png8",
            ImageFormat::Png32 => "png32",
            ImageFormat::Gif => "gif",
            ImageFormat::Jpg => "jpg",
            ImageFormat::JpgBaseline => "jpg-baseline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerSize {
    /// Let the service pick; encodes as an empty keyword
    #[default]
    Default,
    Tiny,
    Mid,
    Small,
}

impl MarkerSize {
    pub fn as_api_str(self) -> &'static str {
        match self {
            MarkerSize::Default => "",
            MarkerSize::Tiny => "tiny",
            MarkerSize::Mid => "mid",
            MarkerSize::Small => "small",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marker {
    pub color: Option<String>,
    pub label: Option<String>,
    pub size: MarkerSize,
    pub icon_url: Option<String>,
}

impl Marker {
    /// Pipe-joined attributes in the order icon, color, label, size.
    ///
    /// A set icon URL is written as `icon:{size}`, not the URL itself.
    pub fn segment(&self) -> String {
        let mut attrs = Vec::new();

        if self.icon_url.as_deref().is_some_and(|u| !u.is_empty()) {
            attrs.push(format!("icon:{}", self.size.as_api_str()));
        }
        if let Some(color) = non_empty(self.color.as_deref()) {
            attrs.push(format!("color:{color}"));
        }
        if let Some(label) = non_empty(self.label.as_deref()) {
            attrs.push(format!("label:{label}"));
        }
        if self.size != MarkerSize::Default {
            attrs.push(format!("size:{}", self.size.as_api_str()));
        }

        attrs.join("|")
    }
}

/// Parameters of one Static Maps image request. Unset fields are left out of
/// the query entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticMap {
    pub map_type: Option<MapType>,
    pub format: Option<ImageFormat>,
    pub region: Option<String>,
    /// Address or `"lat,lng"`
    pub center: Option<String>,
    pub zoom: Option<u32>,
    pub size: Option<MapSize>,
    pub markers: Vec<Marker>,
}

impl StaticMap {
    ///
    /// # query_params
    /// Translate the map description into query parameters, one `markers`
    /// entry per marker in input order. The `key` parameter is not included.
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        let mut push = |k: &str, v: String| params.push((k.to_string(), v));

        if let Some(region) = non_empty(self.region.as_deref()) {
            push("region", region.to_string());
        }
        if let Some(format) = self.format {
            push("format", format.as_api_str().to_string());
        }
        if let Some(center) = non_empty(self.center.as_deref()) {
            push("center", center.to_string());
        }
        if let Some(zoom) = self.zoom.filter(|z| *z != 0) {
            push("zoom", zoom.to_string());
        }
        if let Some(size) = self.size.filter(|s| s.width != 0 && s.height != 0) {
            push("size", format!("{}x{}", size.width, size.height));
        }
        if let Some(map_type) = self.map_type {
            push("maptype", map_type.as_api_str().to_string());
        }
        for marker in &self.markers {
            push("markers", marker.segment());
        }

        params
    }
}

/// Build the authenticated Static Maps URL for `map` against `endpoint`.
pub fn render_url(endpoint: &str, map: &StaticMap, api_key: &str) -> String {
    build_url(endpoint, map.query_params(), api_key)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
