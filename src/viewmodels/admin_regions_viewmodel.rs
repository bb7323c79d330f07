// ============================================================================
// ADMIN REGIONS VIEWMODEL
// ============================================================================
// Tabla de regiones con formulario de alta/edición. Las mutaciones parchean
// la lista cargada; el hook borra los avisos de éxito tras un retardo
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use super::search::filter_regions;
use crate::models::{Region, RegionId};
use crate::services::MarketplaceApi;

pub const LOAD_FAILED: &str = "Failed to load regions";
pub const SAVE_FAILED: &str = "Failed to save region";
pub const DELETE_FAILED: &str = "Failed to delete region. It may be in use by one or more companies.";
pub const ADDED: &str = "Region added successfully";
pub const UPDATED: &str = "Region updated successfully";
pub const DELETED: &str = "Region deleted successfully";
pub const DELETE_PROMPT: &str =
    "Are you sure you want to delete this region? This may affect companies that are associated with it.";

#[derive(Clone, Debug, PartialEq)]
pub enum EditorMode {
    Adding,
    Editing(RegionId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegionEditor {
    pub mode: EditorMode,
    pub name: String,
    pub saving: bool,
}

impl RegionEditor {
    pub fn trimmed_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }

    pub fn can_save(&self) -> bool {
        !self.saving && self.trimmed_name().is_some()
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Adding => "Add New Region",
            EditorMode::Editing(_) => "Edit Region",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminRegionsState {
    pub regions: Vec<Region>,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<&'static str>,
    pub editor: Option<RegionEditor>,
}

impl Default for AdminRegionsState {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            search: String::new(),
            loading: true,
            error: None,
            notice: None,
            editor: None,
        }
    }
}

impl AdminRegionsState {
    pub fn visible_regions(&self) -> Vec<Region> {
        filter_regions(&self.regions, &self.search)
    }
}

pub enum AdminRegionsAction {
    Loaded(Result<Vec<Region>, String>),
    SearchChanged(String),
    StartAdd,
    StartEdit(Region),
    NameChanged(String),
    CancelEdit,
    SaveStarted,
    Created(Region),
    Updated(Region),
    SaveFailed(String),
    Deleted(RegionId),
    DeleteFailed(String),
    ClearNotice,
    DismissError,
}

impl Reducible for AdminRegionsState {
    type Action = AdminRegionsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AdminRegionsAction::Loaded(Ok(regions)) => {
                next.regions = regions;
                next.loading = false;
                next.error = None;
            }
            AdminRegionsAction::Loaded(Err(message)) => {
                next.loading = false;
                next.error = Some(message);
            }
            AdminRegionsAction::SearchChanged(term) => next.search = term,
            AdminRegionsAction::StartAdd => {
                next.editor = Some(RegionEditor { mode: EditorMode::Adding, name: String::new(), saving: false });
            }
            AdminRegionsAction::StartEdit(region) => {
                next.editor = Some(RegionEditor { mode: EditorMode::Editing(region.id), name: region.name, saving: false });
            }
            AdminRegionsAction::NameChanged(name) => match next.editor.as_mut() {
                Some(editor) => editor.name = name,
                None => return self,
            },
            AdminRegionsAction::CancelEdit => next.editor = None,
            AdminRegionsAction::SaveStarted => match next.editor.as_mut() {
                Some(editor) => {
                    editor.saving = true;
                    next.error = None;
                }
                None => return self,
            },
            AdminRegionsAction::Created(region) => {
                next.regions.push(region);
                next.editor = None;
                next.notice = Some(ADDED);
            }
            AdminRegionsAction::Updated(region) => {
                if let Some(existing) = next.regions.iter_mut().find(|r| r.id == region.id) {
                    *existing = region;
                }
                next.editor = None;
                next.notice = Some(UPDATED);
            }
            AdminRegionsAction::SaveFailed(message) => {
                next.error = Some(message);
                if let Some(editor) = next.editor.as_mut() {
                    editor.saving = false;
                }
            }
            AdminRegionsAction::Deleted(id) => {
                next.regions.retain(|r| r.id != id);
                next.notice = Some(DELETED);
            }
            AdminRegionsAction::DeleteFailed(message) => next.error = Some(message),
            AdminRegionsAction::ClearNotice => {
                if self.notice.is_none() {
                    return self;
                }
                next.notice = None;
            }
            AdminRegionsAction::DismissError => next.error = None,
        }
        Rc::new(next)
    }
}

#[derive(Clone)]
pub struct AdminRegionsViewModel<A> {
    api: A,
}

impl<A: MarketplaceApi> AdminRegionsViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<Vec<Region>, String> {
        self.api.admin_regions().await.map_err(|e| {
            log::error!("❌ Error cargando regiones: {}", e);
            LOAD_FAILED.to_string()
        })
    }

    /// Crea o renombra según el modo del editor. Un nombre en blanco da `None`
    pub async fn save(&self, editor: &RegionEditor) -> Option<Result<AdminRegionsAction, String>> {
        let name = editor.trimmed_name()?;
        let result = match editor.mode {
            EditorMode::Adding => {
                log::info!("➕ Creando región {}", name);
                self.api.create_region(name).await.map(AdminRegionsAction::Created)
            }
            EditorMode::Editing(id) => {
                log::info!("✏️ Renombrando región {} a {}", id, name);
                self.api.update_region(id, name).await.map(AdminRegionsAction::Updated)
            }
        };
        Some(result.map_err(|e| {
            log::error!("❌ Error guardando región: {}", e);
            SAVE_FAILED.to_string()
        }))
    }

    pub async fn delete(&self, id: RegionId) -> Result<RegionId, String> {
        log::info!("🗑️ Eliminando región {}", id);
        self.api.delete_region(id).await.map(|()| id).map_err(|e| {
            log::error!("❌ Error eliminando región {}: {}", id, e);
            DELETE_FAILED.to_string()
        })
    }
}
