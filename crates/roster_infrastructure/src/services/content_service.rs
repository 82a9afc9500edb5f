use async_trait::async_trait;

use roster_interface::content::{
    model::{HistoryPage, HomeBanner, Product, StorePage},
    service::ContentService,
};
use roster_interface::errors::Result;

use crate::settings::Content;

// Number of products shown on the home screen.
pub const STORE_PREVIEW_SIZE: usize = 3;

/// Content of the static screens. Only the team name and founding year vary
/// between deployments.
#[derive(Clone)]
pub struct StaticContentService {
    team_name: String,
    founded_year: u16,
    products: Vec<Product>,
}

fn product(id: &str, image: &str, label: &str) -> Product {
    Product {
        id: id.to_string(),
        image: image.to_string(),
        label: label.to_string(),
    }
}

impl StaticContentService {
    pub fn new(settings: &Content) -> Self {
        Self {
            team_name: settings.team_name.clone(),
            founded_year: settings.founded_year,
            products: vec![
                product("1", "/assets/images/merch1.jpg", "EQUIPAMIENTO"),
                product("2", "/assets/images/merch2.jpg", "COMPLEMENTOS"),
                product("3", "/assets/images/merch3.jpg", "SUDADERAS"),
            ],
        }
    }

    fn since(&self) -> String {
        format!("Since {}", self.founded_year)
    }
}

#[async_trait]
impl ContentService for StaticContentService {
    async fn get_home_banner(&self) -> Result<HomeBanner> {
        Ok(HomeBanner {
            title: format!("El {}", self.team_name),
            subtitle: "Descubre nuestro equipo y sus jugadores".to_string(),
            since: self.since(),
            blurb: format!(
                "{} combina pasión, esfuerzo y juego limpio. Con dedicación y trabajo en \
                 equipo, buscamos mejorar en cada partido. ¡Únete a esta familia deportiva!",
                self.team_name
            ),
            image: "/assets/images/portada.png".to_string(),
        })
    }

    async fn get_history(&self) -> Result<HistoryPage> {
        Ok(HistoryPage {
            title: self.since(),
            description: format!(
                "El {} es un grupo apasionado de jugadores que combinan talento, esfuerzo y \
                 trabajo en equipo para alcanzar la victoria. Con una mezcla de experiencia y \
                 juventud, nuestro equipo se enfoca en el juego limpio, la estrategia y la \
                 dedicación en cada entrenamiento. Estamos comprometidos en superarnos día a \
                 día, buscando siempre mejorar y dar lo mejor en cada partido. ¡Únete a \
                 nosotros y forma parte de esta increíble familia deportiva!",
                self.team_name
            ),
            image: "/assets/images/pngegg.png".to_string(),
        })
    }

    async fn get_store(&self) -> Result<StorePage> {
        Ok(StorePage {
            title: "Tienda Oficial".to_string(),
            products: self.products.clone(),
        })
    }
}
