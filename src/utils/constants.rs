/// Claves de localStorage (compartidas con la versión web anterior del panel)
pub const USER_NAME_KEY: &str = "userName";
pub const DEVICE_NUMBER_KEY: &str = "deviceNumber";

/// Id del contenedor donde Leaflet monta el mapa
pub const MAP_CONTAINER_ID: &str = "map";
