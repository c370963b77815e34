//! Static page chrome: header, stylesheet, footer and the DataTables behavior script

use crate::render::html_escape;

pub const DATATABLES_CSS: &str = "https://cdn.datatables.net/1.13.6/css/jquery.dataTables.min.css";
pub const JQUERY_JS: &str = "https://code.jquery.com/jquery-3.7.1.min.js";
pub const DATATABLES_JS: &str = "https://cdn.datatables.net/1.13.6/js/jquery.dataTables.min.js";

pub const DEFAULT_TITLE: &str = "Itch.io Game Library";

/// Stylesheet for thumbnails, zoom preview, chips and the clear button
fn catalog_styles() -> &'static str {
    r#"
    /* --- page & table basics --- */
    body { font-family: sans-serif; padding: 20px; background: #fefefe; }
    table { width: 100%; border-collapse: collapse; table-layout: auto; }
    th, td { vertical-align: top; padding: 12px 10px; }

    /* --- zebra striping override & hover --- */
    #games tbody tr:hover { background-color: #eef6fb !important; }

    /* --- thumbnails & zoom --- */
    .thumb-wrapper { position: relative; display: inline-block; }
    img.thumb {
      width: 160px; height: auto; border-radius: 10px;
      object-fit: cover; box-shadow: 0 0 5px rgba(0,0,0,0.1);
      transition: transform 0.2s, box-shadow 0.2s; z-index:1;
    }
    img.thumb:hover {
      transform: scale(1.05); box-shadow: 0 0 8px rgba(0,0,0,0.2);
    }
    .thumb-wrapper:hover .zoomed { display: block; }
    .zoomed {
      display: none; position: fixed; top:50%; left:50%;
      transform: translate(-50%,-50%) scale(2.25);
      z-index:1000; border:5px solid white;
      box-shadow:0 0 15px rgba(0,0,0,0.5);
      background:white; max-width:90vw; max-height:90vh;
    }

    /* --- filter chips --- */
    .filter-chip {
      background: #eee; padding:2px 6px; margin:2px;
      border-radius:5px; text-decoration:none; color:#333;
      font-size:0.9em; cursor:pointer;
    }
    .filter-chip:hover { background:#ccc; }

    /* --- clear button --- */
    #clear-filter { margin-bottom:10px; display:none; }
  "#
}

/// Table setup, column filter row, chip click filtering, paid toggle and clear button.
/// Browser-side only; copied into the page as-is.
fn behavior_script() -> &'static str {
    r#"
  $(document).ready(function(){
    const table = $('#games').DataTable({
      orderCellsTop: true,
      fixedHeader: true,
      pageLength: 25,
      stripeClasses: [],
      rowCallback: function(row,data,index) {
        const bg = index % 2 === 0 ? '#ffffff' : '#f9f9f9';
        $(row).css('background-color', bg);
      },
      columnDefs: [{
        targets: 6,
        render: function(data,type) {
          if (type==='sort' || type==='type') {
            const cleaned = data.replace(/<[^>]+>/g,'').replace(/[^\d.]/g,'');
            return cleaned ? parseFloat(cleaned) : Infinity;
          }
          return data;
        }
      }]
    });

    // Add filter row
    $('#games thead tr').clone(false).appendTo('#games thead');
    $('#games thead tr:eq(1) th').each(function(i){
      $(this).removeClass('sorting sorting_asc sorting_desc');
      if (i === 0) {
        $(this).html('');
      }
      else if (i === 3) {
        // Category → dropdown
        const options = [
          "All", "Assets", "Book", "Comic",
          "N/A", "Other", "Physical game",
          "Soundtrack", "Tool"
        ];
        const select = $('<select style="width:100%"></select>')
          .append(options.map(o => `<option>${o}</option>`).join(''))
          .on('change', function(){
            const val = this.value === "All" ? "" : this.value;
            if (table.column(i).search() !== val) {
              table.column(i).search(val).draw();
            }
          }).on('click', e => e.stopPropagation());
        $(this).html(select);
      }
      else if (i === 6) {
        $(this).html('<label><input type="checkbox" id="paid-filter"/> Paid?</label>')
               .find('label').on('click', e => e.stopPropagation());
      }
      else {
        const input = $('<input>', {
          type: 'text', placeholder: 'Search...', style: 'width:100%'
        });
        $(this).html(input).find('input')
          .on('keyup change', function() {
            if (table.column(i).search() !== this.value) {
              table.column(i).search(this.value).draw();
            }
          }).on('click', e => e.stopPropagation());
      }
    });

    // Chip click → filter
    $('#games tbody').on('click', '.filter-chip', function(e){
      e.preventDefault();
      const term = $(this).text().trim();
      const col  = $(this).closest('td').index();
      const inp  = $('#games thead tr:eq(1) th').eq(col).find('input, select');
      if (inp.length) {
        inp.val(term).trigger('change');
        $('#clear-filter').show();
      }
    });

    // Paid toggle
    $('#games thead').on('change','#paid-filter',function(){
      if (this.checked) {
        table.column(6).search('^(?!N/A$).*$',true,false).draw();
      } else {
        table.column(6).search('').draw();
      }
      $('#clear-filter').show();
    });

    // Clear filters
    $('#clear-filter').on('click',function(){
      $('#games thead tr:eq(1) th input[type=text]').val('');
      $('#games thead tr:eq(1) th select').val('All');
      $('#paid-filter').prop('checked',false).trigger('change');
      table.columns().search('').draw();
      $(this).hide();
    });
  });
  "#
}

/// Everything up to and including the opening `<tbody>`
pub fn page_header(title: &str) -> String {
    let title = html_escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{}</title>
  <link rel="stylesheet" href="{}">
  <style>{}</style>
</head>
<body>
  <h1>🎮 My {}</h1>
  <button id="clear-filter">Clear Filter</button>
  <table id="games" class="display">
    <thead>
      <tr>
        <th>Cover</th><th>Title</th><th>Author</th>
        <th>Category</th><th>Genre</th><th>Tags</th><th>Price</th>
      </tr>
    </thead>
    <tbody>
"#,
        title,
        DATATABLES_CSS,
        catalog_styles(),
        title
    )
}

/// Closes the table and pulls in jQuery, DataTables and the behavior script
pub fn page_footer() -> String {
    format!(
        r#"
    </tbody>
  </table>
  <script src="{}"></script>
  <script src="{}"></script>
  <script>{}</script>
</body>
</html>
"#,
        JQUERY_JS,
        DATATABLES_JS,
        behavior_script()
    )
}
