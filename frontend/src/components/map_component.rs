use std::rc::Rc;

use gloo_console::error;
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::{
    js_sys::{Object, Reflect},
    HtmlElement, Node,
};
use workout_tracker_lib::{
    config::TrackerConfig,
    map::{MapSurface, Marker, PanAnimation},
    workout::Coordinate,
};
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Leaflet calls the bindings do not cover.
    type LeafletObject;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view_with_options(this: &LeafletObject, center: &LatLng, zoom: f64, options: &JsValue);

    #[wasm_bindgen(method)]
    fn on(this: &LeafletObject, kind: &str, handler: &JsValue);

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &LeafletObject);
}

/// A leaflet map living in its own detached container. Cloning shares the map.
#[derive(Clone)]
pub struct LeafletMap {
    map: Map,
    container: HtmlElement,
    _on_click: Rc<Closure<dyn Fn(JsValue)>>,
}

impl PartialEq for LeafletMap {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl LeafletMap {
    pub fn new(config: &TrackerConfig, on_click: Callback<Coordinate>) -> Result<Self, JsValue> {
        let container: HtmlElement = document().create_element("div")?.dyn_into()?;
        container.set_id("map");
        container.set_class_name("map");

        let map = Map::new_with_element(&container, &MapOptions::default());
        add_tile_layer(&map, config);

        let on_click = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| match click_position(&event) {
            Some(coord) => on_click.emit(coord),
            None => error!("Map click without a position"),
        });
        map.unchecked_ref::<LeafletObject>().on("click", on_click.as_ref());

        Ok(Self {
            map,
            container,
            _on_click: Rc::new(on_click),
        })
    }
}

impl MapSurface for LeafletMap {
    fn set_view(&mut self, center: Coordinate, zoom: f64, animation: Option<PanAnimation>) {
        let center = LatLng::new(center.latitude, center.longitude);
        match animation {
            None => {
                self.map.set_view(&center, zoom);
            }
            Some(animation) => {
                let pan = js_object(&[("duration", animation.duration_secs.into())]);
                let options = js_object(&[("animate", true.into()), ("pan", pan.into())]);
                self.map
                    .unchecked_ref::<LeafletObject>()
                    .set_view_with_options(&center, zoom, &options);
            }
        }
    }

    fn add_marker(&mut self, marker: &Marker) {
        let opts = PopupOptions::default();
        opts.set_max_width(marker.popup.max_width);
        opts.set_min_width(marker.popup.min_width);
        opts.set_auto_close(marker.popup.auto_close);
        opts.set_close_on_click(marker.popup.close_on_click);
        opts.set_class_name(marker.popup.class_name.clone());

        let popup = Popup::new(&opts, None);
        popup.set_content(&marker.content.as_str().into());

        let pin = leaflet::Marker::new(&LatLng::new(marker.position.latitude, marker.position.longitude));
        pin.add_to(&self.map);
        pin.bind_popup(&popup);
        pin.unchecked_ref::<LeafletObject>().open_popup();
    }
}

fn click_position(event: &JsValue) -> Option<Coordinate> {
    let latlng = Reflect::get(event, &JsValue::from_str("latlng")).ok()?;
    if latlng.is_undefined() || latlng.is_null() {
        return None;
    }
    let latlng: LatLng = latlng.unchecked_into();
    Some(Coordinate::new(latlng.lat(), latlng.lng()))
}

fn js_object(entries: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        let _ = Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object.into()
}

fn add_tile_layer(map: &Map, config: &TrackerConfig) {
    let opts = TileLayerOptions::new();
    opts.set_attribution(config.attribution.clone());
    TileLayer::new_options(&config.tile_url, &opts).add_to(map);
}

pub struct MapComponent;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    /// None until the position is known.
    pub map: Option<LeafletMap>,
}

impl MapComponent {
    fn render_map(map: &LeafletMap) -> Html {
        let node: &Node = &map.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl Component for MapComponent {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // The container is sized only once it is in the document.
        if let Some(map) = &ctx.props().map {
            map.map.invalidate_size(false);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &ctx.props().map {
            Some(map) => Self::render_map(map),
            None => html! { <div class="map" id="map"></div> },
        }
    }
}
