//! C-ABI wrapper around `todo-view-core`'s view state machines.
//!
//! # Overview
//! Lets a foreign UI host drive `ListView` and `DetailView` while doing its
//! own HTTP. The host asks a view for the request to run, executes it, and
//! feeds back either the response or a transport error message together with
//! the request's `generation`. Everything else (filtering, selection, what
//! to render) is answered by the view.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Views are opaque heap handles; the host frees them with
//!   `todo_list_view_free` / `todo_detail_view_free`.
//! - The C caller owns every returned pointer and must call the matching
//!   `todo_free_*` function to release it.

pub mod types;

use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use todo_view_core::{
    ApiError, DetailView, FetchOutcome, FetchTicket, Filter, HttpResponse, ListView, TodoClient,
};

use types::*;

/// Read a possibly-null C string as UTF-8, replacing invalid sequences.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
unsafe fn read_c_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Outcome for a request that produced no response. Worded the same as a
/// failure raised by a Rust `Transport`.
unsafe fn transport_failure<T>(message: *const c_char) -> FetchOutcome<T> {
    let message = unsafe { read_c_str(message) }.unwrap_or_else(|| "request failed".to_string());
    FetchOutcome::Failed(ApiError::Transport(message).to_string())
}

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// treated as empty.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = unsafe { read_c_str(resp.body) }.unwrap_or_default();
    HttpResponse::new(resp.status, body)
}

// ---------------------------------------------------------------------------
// List view
// ---------------------------------------------------------------------------

/// Create an idle list view that fetches from `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `todo_list_view_free`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_new(base_url: *const c_char) -> *mut FfiListView {
    catch_unwind(|| {
        let Some(url) = (unsafe { read_c_str(base_url) }) else {
            return std::ptr::null_mut();
        };
        Box::into_raw(Box::new(FfiListView {
            view: ListView::new(),
            client: TodoClient::new(&url),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a list view created by `todo_list_view_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_free(view: *mut FfiListView) {
    if !view.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(view) });
        });
    }
}

/// Put the view into `Loading` and return the collection request to run.
///
/// Returns null if `view` is null.
/// The caller must free the returned pointer with `todo_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_mount(view: *mut FfiListView) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if view.is_null() {
            return std::ptr::null_mut();
        }
        let view = unsafe { &mut *view };
        let ticket = view.view.mount();
        FfiHttpRequest::from_core(view.client.build_list_todos(), ticket)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Feed the response of the request with `generation` into the view.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_apply_response(
    view: *mut FfiListView,
    generation: u64,
    response: *const FfiHttpResponse,
) -> FfiApplyResult {
    catch_unwind(|| {
        if view.is_null() || response.is_null() {
            return FfiApplyResult::NullArg;
        }
        let view = unsafe { &mut *view };
        let resp = ffi_response_to_core(unsafe { &*response });
        let outcome = view.client.parse_list_todos(resp).into();
        view.view
            .apply(FetchTicket::from_generation(generation), outcome)
            .into()
    })
    .unwrap_or(FfiApplyResult::Panic)
}

/// Report that the request with `generation` produced no response.
///
/// `message` may be null, in which case a generic message is recorded.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_apply_error(
    view: *mut FfiListView,
    generation: u64,
    message: *const c_char,
) -> FfiApplyResult {
    catch_unwind(|| {
        if view.is_null() {
            return FfiApplyResult::NullArg;
        }
        let view = unsafe { &mut *view };
        let outcome = unsafe { transport_failure(message) };
        view.view
            .apply(FetchTicket::from_generation(generation), outcome)
            .into()
    })
    .unwrap_or(FfiApplyResult::Panic)
}

/// Current lifecycle phase. A null `view` reads as `Idle`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_phase(view: *const FfiListView) -> FfiPhase {
    catch_unwind(|| {
        if view.is_null() {
            return FfiPhase::Idle;
        }
        FfiPhase::of_list(&unsafe { &*view }.view)
    })
    .unwrap_or(FfiPhase::Idle)
}

/// Select the active filter. Operable in every phase.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_set_filter(view: *mut FfiListView, filter: FfiFilter) -> bool {
    catch_unwind(|| {
        if view.is_null() {
            return false;
        }
        unsafe { &mut *view }.view.set_filter(filter.into());
        true
    })
    .unwrap_or(false)
}

/// Select the filter whose control id is `control_id` (`filter-all`,
/// `filter-open`, `filter-completed`). Returns false for unknown ids.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_press_control(
    view: *mut FfiListView,
    control_id: *const c_char,
) -> bool {
    catch_unwind(|| {
        if view.is_null() {
            return false;
        }
        let Some(id) = (unsafe { read_c_str(control_id) }) else {
            return false;
        };
        unsafe { &mut *view }.view.press_control(&id)
    })
    .unwrap_or(false)
}

/// The active filter. A null `view` reads as `All`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_filter(view: *const FfiListView) -> FfiFilter {
    catch_unwind(|| {
        if view.is_null() {
            return FfiFilter::All;
        }
        unsafe { &*view }.view.filter().into()
    })
    .unwrap_or(FfiFilter::All)
}

/// The error message when the view failed, otherwise null.
/// The caller must free a non-null result with `todo_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_error(view: *const FfiListView) -> *mut c_char {
    catch_unwind(|| {
        if view.is_null() {
            return std::ptr::null_mut();
        }
        match unsafe { &*view }.view.error() {
            Some(message) => c_string(message),
            None => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// The rows currently rendered, in display order.
///
/// Returns null if `view` is null.
/// The caller must free the returned pointer with `todo_free_todo_list`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_rows(view: *const FfiListView) -> *mut FfiTodoList {
    catch_unwind(|| {
        if view.is_null() {
            return std::ptr::null_mut();
        }
        let view = unsafe { &*view };
        match view.view.render() {
            todo_view_core::ListRender::Rows(rows) => FfiTodoList::from_core(rows),
            _ => FfiTodoList::from_core(&[]),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Activate the rendered row at `index`, invoking `on_select` with its id
/// and `user_data`. Returns false when there is no such row.
#[unsafe(no_mangle)]
pub extern "C" fn todo_list_view_activate(
    view: *const FfiListView,
    index: u32,
    on_select: FfiSelectCallback,
    user_data: *mut c_void,
) -> bool {
    catch_unwind(|| {
        if view.is_null() {
            return false;
        }
        let view = unsafe { &*view };
        view.view
            .activate(index as usize, |id| {
                if let Some(callback) = on_select {
                    unsafe { callback(id, user_data) };
                }
            })
            .is_some()
    })
    .unwrap_or(false)
}

/// Stable control identifier for `filter`, as a static C string.
/// The pointer is owned by the library and must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn todo_filter_control_id(filter: FfiFilter) -> *const c_char {
    match Filter::from(filter) {
        Filter::All => c"filter-all".as_ptr(),
        Filter::Open => c"filter-open".as_ptr(),
        Filter::Completed => c"filter-completed".as_ptr(),
    }
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// Create an empty detail view that fetches from `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `todo_detail_view_free`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_detail_view_new(base_url: *const c_char) -> *mut FfiDetailView {
    catch_unwind(|| {
        let Some(url) = (unsafe { read_c_str(base_url) }) else {
            return std::ptr::null_mut();
        };
        Box::into_raw(Box::new(FfiDetailView {
            view: DetailView::new(),
            client: TodoClient::new(&url),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a detail view created by `todo_detail_view_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_detail_view_free(view: *mut FfiDetailView) {
    if !view.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(view) });
        });
    }
}

/// Point the view at `id` and return the request to run.
///
/// Returns null if `view` is null or `id` is already the current id (no
/// fetch needed). Otherwise the caller must free the returned pointer with
/// `todo_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_detail_view_show(view: *mut FfiDetailView, id: u64) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if view.is_null() {
            return std::ptr::null_mut();
        }
        let view = unsafe { &mut *view };
        match view.view.show(id) {
            Some(ticket) => FfiHttpRequest::from_core(view.client.build_get_todo(id), ticket),
            None => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Feed the response of the request with `generation` into the view.
#[unsafe(no_mangle)]
pub extern "C" fn todo_detail_view_apply_response(
    view: *mut FfiDetailView,
    generation: u64,
    response: *const FfiHttpResponse,
) -> FfiApplyResult {
    catch_unwind(|| {
        if view.is_null() || response.is_null() {
            return FfiApplyResult::NullArg;
        }
        let view = unsafe { &mut *view };
        let resp = ffi_response_to_core(unsafe { &*response });
        let outcome = view.client.parse_get_todo(resp).into();
        view.view
            .apply(FetchTicket::from_generation(generation), outcome)
            .into()
    })
    .unwrap_or(FfiApplyResult::Panic)
}

/// Report that the request with `generation` produced no response.
#[unsafe(no_mangle)]
pub extern "C" fn todo_detail_view_apply_error(
    view: *mut FfiDetailView,
    generation: u64,
    message: *const c_char,
) -> FfiApplyResult {
    catch_unwind(|| {
        if view.is_null() {
            return FfiApplyResult::NullArg;
        }
        let view = unsafe { &mut *view };
        let outcome = unsafe { transport_failure(message) };
        view.view
            .apply(FetchTicket::from_generation(generation), outcome)
            .into()
    })
    .unwrap_or(FfiApplyResult::Panic)
}

/// Snapshot of what the detail view renders.
///
/// Returns null if `view` is null.
/// The caller must free the returned pointer with `todo_free_detail`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_detail_view_render(view: *const FfiDetailView) -> *mut FfiDetail {
    catch_unwind(|| {
        if view.is_null() {
            return std::ptr::null_mut();
        }
        FfiDetail::from_render(unsafe { &*view }.view.render())
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by a mount/show function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.path);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiTodoList` returned by `todo_list_view_rows`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_todo_list(list: *mut FfiTodoList) {
    if list.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let list = unsafe { Box::from_raw(list) };
        if !list.items.is_null() && list.len > 0 {
            let items = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    list.items,
                    list.len as usize,
                ))
            };
            for item in items.iter() {
                free_c_string(item.title);
            }
        }
    });
}

/// Free an `FfiDetail` returned by `todo_detail_view_render`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_detail(detail: *mut FfiDetail) {
    if detail.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let detail = unsafe { Box::from_raw(detail) };
        for s in [
            detail.title,
            detail.id,
            detail.user_id,
            detail.status,
            detail.error_message,
        ] {
            free_c_string(s);
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_string(s: *mut c_char) {
    let _ = catch_unwind(|| free_c_string(s));
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
