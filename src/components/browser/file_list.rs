//! Directory listing table.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::link::RouteLink;
use crate::models::{AppRoute, FileEntry};
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

/// Display kind of a listing entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryKind {
    Directory,
    Pdf,
    Image,
    Text,
    Other,
}

impl EntryKind {
    fn of(entry: &FileEntry) -> Self {
        if entry.is_dir {
            return Self::Directory;
        }
        match entry.mime_type.as_str() {
            "application/pdf" => Self::Pdf,
            mime if mime.starts_with("image/") => Self::Image,
            mime if mime.starts_with("text/") => Self::Text,
            _ => Self::Other,
        }
    }

    fn icon(self) -> IconData {
        match self {
            Self::Directory => ic::FOLDER,
            Self::Pdf => ic::FILE_PDF,
            Self::Image => ic::FILE_IMAGE,
            Self::Text => ic::FILE_TEXT,
            Self::Other => ic::FILE,
        }
    }
}

/// Entries of the directory at `base`. Directories link one level deeper.
#[component]
pub fn FileList(base: AppRoute, entries: Vec<FileEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class=css::empty>"This directory is empty."</p> }.into_any();
    }

    let rows = entries
        .into_iter()
        .map(|entry| {
            let icon = EntryKind::of(&entry).icon();
            let size = format_size(entry.size_bytes());
            let modified = entry.modified_date().unwrap_or("-").to_string();
            let name = if entry.is_dir {
                let to = base.join(&entry.name);
                view! {
                    <RouteLink to=to class=css::dir title=entry.path.clone()>
                        {entry.name.clone()}
                    </RouteLink>
                }
                .into_any()
            } else {
                view! { <span class=css::file title=entry.path.clone()>{entry.name.clone()}</span> }
                    .into_any()
            };

            view! {
                <tr class=css::row>
                    <td class=css::icon><Icon icon=icon /></td>
                    <td class=css::name>{name}</td>
                    <td class=css::modified>{modified}</td>
                    <td class=css::size>{size}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class=css::list>
            <thead>
                <tr>
                    <th></th>
                    <th>"Name"</th>
                    <th>"Modified"</th>
                    <th>"Size"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, mime: &str, is_dir: bool) -> FileEntry {
        FileEntry {
            path: name.to_string(),
            name: name.to_string(),
            size: 10,
            mime_type: mime.to_string(),
            mod_time: String::new(),
            is_dir,
        }
    }

    #[test]
    fn test_entry_kind() {
        let kind = |name, mime, is_dir| EntryKind::of(&entry(name, mime, is_dir));
        assert_eq!(kind("docs", "inode/directory", true), EntryKind::Directory);
        assert_eq!(kind("a.pdf", "application/pdf", false), EntryKind::Pdf);
        assert_eq!(kind("a.png", "image/png", false), EntryKind::Image);
        assert_eq!(kind("a.md", "text/markdown", false), EntryKind::Text);
        assert_eq!(kind("a.bin", "application/octet-stream", false), EntryKind::Other);
    }
}
