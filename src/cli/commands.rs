use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::{AppContext, Result};
use crate::domain::{ChapterEntry, ListingPage, MangaDetails, MangaSummary, PageImage};
use crate::source::Source;

pub async fn popular(ctx: &AppContext, page: u32, json: bool) -> Result<()> {
    let listing = ctx.source.popular(page).await?;
    print_listing(&listing, json)
}

pub async fn latest(ctx: &AppContext, page: u32, json: bool) -> Result<()> {
    let listing = ctx.source.latest(page).await?;
    print_listing(&listing, json)
}

pub async fn search(ctx: &AppContext, query: &str, json: bool) -> Result<()> {
    let listing = ctx.source.search(1, query).await?;
    print_listing(&listing, json)
}

pub async fn details(ctx: &AppContext, manga_id: &str, json: bool) -> Result<()> {
    let details = ctx.source.manga_details(&summary_for(ctx, manga_id)).await?;

    if json {
        return print_json(&details);
    }
    print_details(&details);
    Ok(())
}

pub async fn chapters(ctx: &AppContext, manga_id: &str, json: bool) -> Result<()> {
    let chapters = ctx.source.chapter_list(&summary_for(ctx, manga_id)).await?;

    if json {
        return print_json(&chapters);
    }
    if chapters.is_empty() {
        println!("No chapters");
        return Ok(());
    }
    for chapter in &chapters {
        println!("{} {}  {}", upload_date(chapter), chapter.display_name, chapter.id);
    }
    Ok(())
}

pub async fn pages(ctx: &AppContext, chapter_id: &str, json: bool) -> Result<()> {
    let request = ctx.connector().page_list_request(chapter_id);
    let body = ctx.fetcher.execute(&request).await?;
    let pages = ctx.connector().parse_page_list(&body)?;

    if json {
        return print_json(&pages);
    }
    print_pages(&pages);
    Ok(())
}

/// Only the URL matters to the details and chapter requests.
fn summary_for(ctx: &AppContext, manga_id: &str) -> MangaSummary {
    MangaSummary {
        id: manga_id.to_string(),
        title: String::new(),
        thumbnail_url: String::new(),
        url: ctx.connector().manga_url(manga_id),
    }
}

fn print_listing(listing: &ListingPage<MangaSummary>, json: bool) -> Result<()> {
    if json {
        return print_json(listing);
    }
    if listing.is_empty() {
        println!("No results");
        return Ok(());
    }

    for manga in &listing.items {
        println!("{}\n  id: {}\n  cover: {}", manga.display_title(), manga.id, manga.thumbnail_url);
    }
    if listing.has_next_page {
        println!("\nMore results on the next page");
    }
    Ok(())
}

fn print_details(details: &MangaDetails) {
    println!("{}", details.title);
    println!("  type: {}", details.manga_type);
    if let Some(count) = details.chapter_count {
        println!("  chapters: {}", count);
    }
    println!("  cover: {}", details.thumbnail_url);
    let description = details.display_description();
    if !description.is_empty() {
        println!("\n{}", description);
    }
}

fn print_pages(pages: &[PageImage]) {
    if pages.is_empty() {
        println!("No pages");
        return;
    }
    for page in pages {
        println!("{:>3} {}", page.index + 1, page.image_url);
    }
}

fn upload_date(chapter: &ChapterEntry) -> String {
    match chapter.uploaded_at_millis {
        0 => "          ".to_string(),
        millis => DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
