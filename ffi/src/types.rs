//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! enums with explicit discriminants. Conversion functions live here to keep
//! `lib.rs` focused on the `extern "C"` surface.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;

use todo_view_core::{
    ApplyOutcome, DetailRender, DetailView, Filter, FetchTicket, HttpMethod, ListPhase, ListView,
    Todo, TodoClient,
};

/// Opaque handle to a list view and the client it fetches with.
pub struct FfiListView {
    pub(crate) view: ListView,
    pub(crate) client: TodoClient,
}

/// Opaque handle to a detail view and the client it fetches with.
pub struct FfiDetailView {
    pub(crate) view: DetailView,
    pub(crate) client: TodoClient,
}

/// Row-activation callback: receives the todo id and the caller's pointer.
pub type FfiSelectCallback = Option<unsafe extern "C" fn(id: u64, user_data: *mut c_void)>;

/// Build a C string, replacing interior NULs so construction cannot fail.
pub(crate) fn c_string(s: impl Into<String>) -> *mut c_char {
    let s: String = s.into();
    CString::new(s.replace('\0', " "))
        .unwrap_or_default()
        .into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request the host must execute.
///
/// `generation` identifies the fetch; pass it back unchanged to the
/// matching `*_apply_*` function.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub generation: u64,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` plus its ticket into a heap-allocated
    /// `FfiHttpRequest`.
    pub(crate) fn from_core(req: todo_view_core::HttpRequest, ticket: FetchTicket) -> *mut Self {
        let path = c_string(req.path);

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path,
            headers,
            headers_len,
            generation: ticket.generation(),
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this after executing a request and passes a
/// pointer to an `*_apply_response` function. The FFI layer reads but does
/// not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Lifecycle phase shared by both views.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiPhase {
    Idle = 0,
    Loading = 1,
    Loaded = 2,
    Failed = 3,
}

impl FfiPhase {
    pub(crate) fn of_list(view: &ListView) -> Self {
        match view.phase() {
            ListPhase::Idle => FfiPhase::Idle,
            ListPhase::Loading => FfiPhase::Loading,
            ListPhase::Loaded { .. } => FfiPhase::Loaded,
            ListPhase::Failed { .. } => FfiPhase::Failed,
        }
    }

    pub(crate) fn of_detail(render: &DetailRender<'_>) -> Self {
        match render {
            DetailRender::Empty => FfiPhase::Idle,
            DetailRender::Loading => FfiPhase::Loading,
            DetailRender::Loaded(_) => FfiPhase::Loaded,
            DetailRender::Failed { .. } => FfiPhase::Failed,
        }
    }
}

/// Completion filter as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiFilter {
    All = 0,
    Open = 1,
    Completed = 2,
}

impl From<FfiFilter> for Filter {
    fn from(f: FfiFilter) -> Self {
        match f {
            FfiFilter::All => Filter::All,
            FfiFilter::Open => Filter::Open,
            FfiFilter::Completed => Filter::Completed,
        }
    }
}

impl From<Filter> for FfiFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::All => FfiFilter::All,
            Filter::Open => FfiFilter::Open,
            Filter::Completed => FfiFilter::Completed,
        }
    }
}

/// Result of feeding a fetch outcome back into a view.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiApplyResult {
    Applied = 0,
    /// The generation was superseded or already answered.
    Stale = 1,
    NullArg = 2,
    Panic = 3,
}

impl From<ApplyOutcome> for FfiApplyResult {
    fn from(outcome: ApplyOutcome) -> Self {
        match outcome {
            ApplyOutcome::Applied => FfiApplyResult::Applied,
            ApplyOutcome::Stale => FfiApplyResult::Stale,
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A single todo item exposed to C.
#[repr(C)]
pub struct FfiTodo {
    pub id: u64,
    pub user_id: u64,
    pub title: *mut c_char,
    pub completed: bool,
}

impl FfiTodo {
    fn from_core(todo: &Todo) -> Self {
        FfiTodo {
            id: todo.id,
            user_id: todo.user_id,
            title: c_string(todo.title.as_str()),
            completed: todo.completed,
        }
    }
}

/// The rows a list view currently renders. Empty while loading or failed.
#[repr(C)]
pub struct FfiTodoList {
    pub items: *mut FfiTodo,
    pub len: u32,
}

impl FfiTodoList {
    pub(crate) fn from_core(todos: &[Todo]) -> *mut Self {
        let len = todos.len() as u32;
        let items = if todos.is_empty() {
            std::ptr::null_mut()
        } else {
            let boxed: Box<[FfiTodo]> = todos.iter().map(FfiTodo::from_core).collect();
            Box::into_raw(boxed) as *mut FfiTodo
        };
        Box::into_raw(Box::new(FfiTodoList { items, len }))
    }
}

/// What a detail view renders.
///
/// When `phase` is `Loaded` the four display strings are set and
/// `error_message` is null; when `Failed` only `error_message` is set.
#[repr(C)]
pub struct FfiDetail {
    pub phase: FfiPhase,
    pub title: *mut c_char,
    pub id: *mut c_char,
    pub user_id: *mut c_char,
    pub status: *mut c_char,
    pub error_message: *mut c_char,
}

impl FfiDetail {
    pub(crate) fn from_render(render: DetailRender<'_>) -> *mut Self {
        let phase = FfiPhase::of_detail(&render);
        let mut detail = FfiDetail {
            phase,
            title: std::ptr::null_mut(),
            id: std::ptr::null_mut(),
            user_id: std::ptr::null_mut(),
            status: std::ptr::null_mut(),
            error_message: std::ptr::null_mut(),
        };
        match render {
            DetailRender::Loaded(fields) => {
                detail.title = c_string(fields.title);
                detail.id = c_string(fields.id);
                detail.user_id = c_string(fields.user_id);
                detail.status = c_string(fields.status);
            }
            DetailRender::Failed { message } => detail.error_message = c_string(message),
            DetailRender::Empty | DetailRender::Loading => {}
        }
        Box::into_raw(Box::new(detail))
    }
}
