use crate::{AppError, ImagesConfig};
use serde::{Deserialize, Serialize};

/// Public pass status as served by the status endpoint.
///
/// Every field is optional; the endpoint also returns a body on 404 when no
/// status has been scraped yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PassStatusResponse {
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub image_filename: Option<String>,
}

/// Background color of the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorColor {
    Green,
    Red,
    Gray,
}

impl IndicatorColor {
    pub fn as_css(&self) -> &'static str {
        match self {
            IndicatorColor::Green => "green",
            IndicatorColor::Red => "red",
            IndicatorColor::Gray => "gray",
        }
    }
}

/// Visual state of the pass indicator for one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassState {
    #[default]
    Loading,
    Open,
    Closed,
    Unknown,
    LoadError,
    ConnectionError,
}

impl PassState {
    /// Map the reported `estado`, ignoring case.
    pub fn from_estado(estado: Option<&str>) -> Self {
        match estado.map(str::to_lowercase).as_deref() {
            Some("abierto") | Some("habilitado") => PassState::Open,
            Some("cerrado") => PassState::Closed,
            _ => PassState::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PassState::Loading => "CARGANDO ESTADO...",
            PassState::Open => "PASO ABIERTO",
            PassState::Closed => "PASO CERRADO",
            PassState::Unknown => "ESTADO DESCONOCIDO",
            PassState::LoadError => "ERROR al cargar estado",
            PassState::ConnectionError => "ERROR de conexión",
        }
    }

    pub fn color(&self) -> IndicatorColor {
        match self {
            PassState::Open => IndicatorColor::Green,
            PassState::Closed => IndicatorColor::Red,
            _ => IndicatorColor::Gray,
        }
    }
}

/// Everything the status widget renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PassIndicator {
    pub state: PassState,
    /// Image source; only set when the status loaded successfully.
    pub image_src: Option<String>,
}

impl PassIndicator {
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn from_response(response: &PassStatusResponse, images: &ImagesConfig) -> Self {
        let filename = response
            .image_filename
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(images.default_image.as_str());
        Self {
            state: PassState::from_estado(response.estado.as_deref()),
            image_src: Some(images.path_for(filename)),
        }
    }

    /// Non-ok statuses and transport failures render differently; neither sets an image.
    pub fn from_error(err: &AppError) -> Self {
        let state = if err.is_transport() {
            PassState::ConnectionError
        } else {
            PassState::LoadError
        };
        Self {
            state,
            image_src: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.state.label()
    }

    pub fn color(&self) -> IndicatorColor {
        self.state.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn estado_matching_is_case_insensitive() {
        assert_eq!(PassState::from_estado(Some("ABIERTO")), PassState::Open);
        assert_eq!(PassState::from_estado(Some("Habilitado")), PassState::Open);
        assert_eq!(PassState::from_estado(Some("cErRaDo")), PassState::Closed);
    }

    #[test]
    fn unrecognized_or_missing_estado_is_unknown() {
        assert_eq!(PassState::from_estado(None), PassState::Unknown);
        assert_eq!(PassState::from_estado(Some("")), PassState::Unknown);
        assert_eq!(PassState::from_estado(Some("desconocido")), PassState::Unknown);
        assert_eq!(PassState::from_estado(Some("Error")), PassState::Unknown);
        assert_eq!(PassState::from_estado(Some("abierto parcialmente")), PassState::Unknown);
    }

    #[test]
    fn open_status_without_image_uses_default() {
        let resp: PassStatusResponse = serde_json::from_str(r#"{"estado":"ABIERTO"}"#).unwrap();
        let indicator = PassIndicator::from_response(&resp, &ImagesConfig::default());
        assert_eq!(indicator.label(), "PASO ABIERTO");
        assert_eq!(indicator.color().as_css(), "green");
        assert_eq!(indicator.image_src.as_deref(), Some("/static/images/default_pass.jpg"));
    }

    #[test]
    fn closed_status_with_image() {
        let resp = PassStatusResponse {
            estado: Some("Cerrado".into()),
            image_filename: Some("cristo_3.jpg".into()),
            ..Default::default()
        };
        let indicator = PassIndicator::from_response(&resp, &ImagesConfig::default());
        assert_eq!(
            indicator,
            PassIndicator {
                state: PassState::Closed,
                image_src: Some("/static/images/cristo_3.jpg".into()),
            }
        );
        assert_eq!(indicator.color(), IndicatorColor::Red);
    }

    #[test]
    fn empty_image_filename_falls_back_to_default() {
        let resp = PassStatusResponse {
            estado: Some("cerrado".into()),
            image_filename: Some(String::new()),
            ..Default::default()
        };
        let indicator = PassIndicator::from_response(&resp, &ImagesConfig::default());
        assert_eq!(indicator.image_src.as_deref(), Some("/static/images/default_pass.jpg"));
    }

    #[test]
    fn status_error_renders_load_error() {
        let indicator = PassIndicator::from_error(&AppError::not_found("No hay registros de paso"));
        assert_eq!(indicator.state, PassState::LoadError);
        assert_eq!(indicator.label(), "ERROR al cargar estado");
        assert_eq!(indicator.color(), IndicatorColor::Gray);
        assert_eq!(indicator.image_src, None);
    }

    #[test]
    fn transport_error_renders_connection_error() {
        let indicator = PassIndicator::from_error(&AppError::network("failed to fetch"));
        assert_eq!(indicator.state, PassState::ConnectionError);
        assert_eq!(indicator.label(), "ERROR de conexión");
        assert_eq!(indicator.image_src, None);
    }

    #[test]
    fn loading_indicator_is_gray_without_image() {
        let indicator = PassIndicator::loading();
        assert_eq!(indicator.state, PassState::Loading);
        assert_eq!(indicator.label(), "CARGANDO ESTADO...");
        assert_eq!(indicator.color(), IndicatorColor::Gray);
        assert_eq!(indicator.image_src, None);
    }
}
