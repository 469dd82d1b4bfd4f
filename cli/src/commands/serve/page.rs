//! # codetidy Upload Page
//!
//! File: cli/src/commands/serve/page.rs
//!
//! The single HTML page served at `/`. It posts the chosen file to
//! `/api/process`, then shows each file's original and formatted text side by
//! side with download links, plus the generated README for archives.
//!
//! The page only renders the response of the most recently started upload;
//! responses of earlier uploads that arrive late are ignored.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>codetidy</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 72rem; color: #222; }
  #drop { border: 2px dashed #888; border-radius: 8px; padding: 2rem; text-align: center; }
  #drop.over { background: #eef6ff; border-color: #3778c2; }
  #status { margin: 1rem 0; min-height: 1.5em; }
  #status.error { color: #b00020; }
  .file { border: 1px solid #ddd; border-radius: 6px; margin: 1rem 0; }
  .file h3 { margin: 0; padding: .5rem 1rem; background: #f4f4f4; font-size: 1rem; }
  .panes { display: grid; grid-template-columns: 1fr 1fr; }
  pre { margin: 0; padding: .75rem 1rem; overflow: auto; max-height: 24rem; font-size: .85rem; }
  .panes pre + pre { border-left: 1px solid #ddd; }
  a.button { display: inline-block; margin: .5rem 1rem; }
</style>
</head>
<body>
<h1>codetidy</h1>
<p>Drop a source file or a ZIP archive. Archives also get a generated README.</p>
<div id="drop">
  <p>Drag a file here, or</p>
  <input type="file" id="picker">
</div>
<div id="status"></div>
<section id="readme" hidden>
  <h2>README.md</h2>
  <a class="button" href="/download/readme">Download README.md</a>
  <pre id="readme-text"></pre>
</section>
<section id="files"></section>
<script>
  let latestRequest = 0;
  const drop = document.getElementById("drop");
  const picker = document.getElementById("picker");
  const status = document.getElementById("status");

  function setStatus(text, isError) {
    status.textContent = text;
    status.className = isError ? "error" : "";
  }

  function el(tag, text) {
    const node = document.createElement(tag);
    if (text !== undefined) node.textContent = text;
    return node;
  }

  function render(summary) {
    const readme = document.getElementById("readme");
    readme.hidden = !summary.readme;
    document.getElementById("readme-text").textContent = summary.readme || "";

    const files = document.getElementById("files");
    files.replaceChildren();
    summary.files.forEach((file, index) => {
      const box = el("div");
      box.className = "file";
      box.appendChild(el("h3", file.path));
      const panes = el("div");
      panes.className = "panes";
      panes.appendChild(el("pre", file.content));
      panes.appendChild(el("pre", file.formatted ?? file.content));
      box.appendChild(panes);
      const link = el("a", "Download formatted_" + file.name);
      link.className = "button";
      link.href = "/download/formatted/" + index;
      box.appendChild(link);
      files.appendChild(box);
    });
  }

  async function upload(file) {
    const request = ++latestRequest;
    setStatus("Processing " + file.name + "...", false);
    try {
      const response = await fetch("/api/process?name=" + encodeURIComponent(file.name), {
        method: "POST",
        body: file,
      });
      const body = await response.json();
      if (request !== latestRequest) return;
      if (!response.ok) {
        setStatus(body.error || "Error processing file", true);
        document.getElementById("readme").hidden = true;
        document.getElementById("files").replaceChildren();
        return;
      }
      setStatus("Processed " + body.files.length + " file(s) from " + body.upload_name + ".", false);
      render(body);
    } catch (err) {
      if (request === latestRequest) setStatus("Error processing file", true);
    }
  }

  picker.addEventListener("change", () => {
    if (picker.files.length > 0) upload(picker.files[0]);
  });
  drop.addEventListener("dragover", (event) => {
    event.preventDefault();
    drop.classList.add("over");
  });
  drop.addEventListener("dragleave", () => drop.classList.remove("over"));
  drop.addEventListener("drop", (event) => {
    event.preventDefault();
    drop.classList.remove("over");
    if (event.dataTransfer.files.length > 0) upload(event.dataTransfer.files[0]);
  });
</script>
</body>
</html>
"#;
